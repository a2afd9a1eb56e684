// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Report input.
//!
//! The store module reads the JSON report emitted by the survey geometry engine and converts it
//! into the read-only parcel model. Nothing is ever written back.

pub mod report_file;

pub use report_file::{load_report, parse_report, report_schema, ParcelJson, SegmentJson, StoreError};
