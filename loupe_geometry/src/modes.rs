// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the host should place content inside the viewport.
///
/// This mirrors the two rendering paths a host typically has for a raster:
/// an automatic aspect-preserving fit, or an explicit matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The host fits and centers the content itself.
    ///
    /// While in this mode the stored content matrix is the identity and
    /// carries no information; see [`crate::fit_center_transform`] for the
    /// equivalent explicit matrix.
    #[default]
    Fit,
    /// The host renders the content through the matrix pushed to it.
    FreeTransform,
}
