// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mapcheck — parcel closure report viewer (model + text render + TUI).
//!
//! Parcel records are loaded once and never modified. All interaction (cell highlights, panel
//! collapse) lives in [`ui::InteractionState`], owned by a [`render::MapcheckView`].

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
pub mod tui;
pub mod ui;
