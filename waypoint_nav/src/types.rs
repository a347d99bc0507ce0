// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: attachment points, resolved positions, and orientations.
//!
//! ## Overview
//!
//! An [`Attachment`] marks where a segment begins. Which representation new
//! segments get is chosen once per registry by an [`AttachmentPolicy`].
//! Against the current screens an attachment resolves to a [`Position`],
//! and positions are what the cascade compares.

/// How new segments record their attachment point.
///
/// ## Semantics
///
/// - `ByIndex`: the offset of the top screen when the segment started.
///   Inserts below that offset shift it up by one. A segment started on an
///   empty stack records [`Attachment::BelowStack`].
/// - `ByIdentity`: the top screen itself. Inserts need no adjustment, and a
///   replaced screen is detected even when the stack height is unchanged.
///   Starting a segment on an empty stack is a silent no-op.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AttachmentPolicy {
    /// Track segments by stack offset.
    ByIndex,
    /// Track segments by the screen they started on.
    #[default]
    ByIdentity,
}

/// Where a segment begins.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Attachment<S> {
    /// Before the first screen; only produced by index-mode registries.
    BelowStack,
    /// Offset into the stack, counted from the bottom.
    Index(usize),
    /// A specific screen.
    Screen(S),
}

impl<S: PartialEq> Attachment<S> {
    /// Resolve against `screens` (bottom to top).
    ///
    /// Returns `None` when the attachment no longer names a screen in the stack.
    pub fn resolve(&self, screens: &[S]) -> Option<Position> {
        match self {
            Self::BelowStack => Some(Position::BelowStack),
            Self::Index(i) => (*i < screens.len()).then_some(Position::At(*i)),
            Self::Screen(s) => screens.iter().position(|x| x == s).map(Position::At),
        }
    }
}

/// A resolved attachment point.
///
/// Ordered bottom to top: `BelowStack` sorts before every `At`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Position {
    /// Before the first screen.
    BelowStack,
    /// At the given stack offset.
    At(usize),
}

/// A single interface orientation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Upright portrait.
    #[default]
    Portrait,
    /// Portrait, rotated 180 degrees.
    PortraitUpsideDown,
    /// Landscape with the top edge on the left.
    LandscapeLeft,
    /// Landscape with the top edge on the right.
    LandscapeRight,
}

impl Orientation {
    /// The mask bit for this orientation.
    pub const fn mask(self) -> OrientationMask {
        match self {
            Self::Portrait => OrientationMask::PORTRAIT,
            Self::PortraitUpsideDown => OrientationMask::PORTRAIT_UPSIDE_DOWN,
            Self::LandscapeLeft => OrientationMask::LANDSCAPE_LEFT,
            Self::LandscapeRight => OrientationMask::LANDSCAPE_RIGHT,
        }
    }
}

bitflags::bitflags! {
    /// Set of orientations a segment supports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OrientationMask: u8 {
        /// Upright portrait.
        const PORTRAIT             = 0b0000_0001;
        /// Portrait, rotated 180 degrees.
        const PORTRAIT_UPSIDE_DOWN = 0b0000_0010;
        /// Landscape with the top edge on the left.
        const LANDSCAPE_LEFT       = 0b0000_0100;
        /// Landscape with the top edge on the right.
        const LANDSCAPE_RIGHT      = 0b0000_1000;
        /// Both landscape orientations.
        const LANDSCAPE = Self::LANDSCAPE_LEFT.bits() | Self::LANDSCAPE_RIGHT.bits();
        /// Everything except upside-down portrait.
        const ALL_BUT_UPSIDE_DOWN = Self::PORTRAIT.bits() | Self::LANDSCAPE.bits();
    }
}

impl Default for OrientationMask {
    fn default() -> Self {
        Self::all()
    }
}

impl OrientationMask {
    /// Whether `orientation` is in this set.
    #[inline]
    pub const fn supports(self, orientation: Orientation) -> bool {
        self.contains(orientation.mask())
    }
}
