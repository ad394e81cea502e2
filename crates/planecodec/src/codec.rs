//! Common interface of the two codecs

use planecodec_core::{Channels, Plane, PlaneResult};

/// A lossy plane codec with a positional retention budget
pub trait Codec: Sync {
    /// Short display name
    fn name(&self) -> &'static str;

    /// Largest accepted retention parameter
    fn max_retention(&self) -> usize;

    /// Encode a plane, keep `retention` coefficients and decode the rest
    ///
    /// The plane size and the retention parameter are validated before any
    /// transform runs.
    fn reconstruct(&self, plane: &Plane, retention: usize) -> PlaneResult<Plane>;

    /// Reconstruct all three channels, one rayon task per channel
    fn reconstruct_channels(&self, channels: &Channels, retention: usize) -> PlaneResult<Channels> {
        log::debug!("{} reconstructing three channels at {}", self.name(), retention);
        let (y, (cb, cr)) = rayon::join(
            || self.reconstruct(&channels.y, retention),
            || {
                rayon::join(
                    || self.reconstruct(&channels.cb, retention),
                    || self.reconstruct(&channels.cr, retention),
                )
            },
        );
        Channels::new(y?, cb?, cr?)
    }
}
