// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Parcels arrive fully computed from the survey geometry engine; the model only carries them
//! (plus the cell addressing scheme used by the interactive view).

pub mod cell_key;
pub mod fixtures;
pub mod parcel;

pub use cell_key::{CellKey, Column};
pub use parcel::{CurveSegment, LineSegment, ParcelRecord, SegmentRecord, UnsupportedSegment};
