// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive presentation state.
//!
//! Two independent binary toggles: cell highlights keyed by [`CellKey`] and panel collapse keyed
//! by parcel index. The toggle methods are the only mutation entry points. Nothing here is
//! persisted; the state lives exactly as long as the view that owns it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::CellKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    rev: u64,
    // Absence means off. Toggling off keeps a `false` entry, which reads the same as absence.
    highlighted: BTreeMap<CellKey, bool>,
    // Absence means expanded.
    collapsed: BTreeMap<usize, bool>,
}

impl InteractionState {
    /// Bumped on every mutation; lets callers skip work when nothing changed.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn is_highlighted(&self, key: &CellKey) -> bool {
        self.highlighted.get(key).copied().unwrap_or(false)
    }

    pub fn is_collapsed(&self, parcel_index: usize) -> bool {
        self.collapsed.get(&parcel_index).copied().unwrap_or(false)
    }

    /// Flips the highlight of one cell and returns the new value.
    pub fn toggle_cell(&mut self, key: CellKey) -> bool {
        let entry = self.highlighted.entry(key).or_insert(false);
        *entry = !*entry;
        let on = *entry;
        self.rev = self.rev.wrapping_add(1);
        debug!(cell = %key, highlighted = on, "cell highlight toggled");
        on
    }

    /// Flips a parcel panel between expanded and collapsed and returns `true` when it is now
    /// collapsed. Highlights inside the parcel are left untouched.
    pub fn toggle_collapse(&mut self, parcel_index: usize) -> bool {
        let entry = self.collapsed.entry(parcel_index).or_insert(false);
        *entry = !*entry;
        let collapsed = *entry;
        self.rev = self.rev.wrapping_add(1);
        debug!(parcel_index, collapsed, "parcel collapse toggled");
        collapsed
    }

    /// Whether any cell of the parcel is highlighted. Derived from the highlight map on every
    /// call; no per-parcel flag is stored.
    pub fn parcel_has_highlight(&self, parcel_index: usize) -> bool {
        self.parcel_highlights(parcel_index).next().is_some()
    }

    /// Number of highlighted cells in the parcel.
    pub fn parcel_highlight_count(&self, parcel_index: usize) -> usize {
        self.parcel_highlights(parcel_index).count()
    }

    /// All highlighted cells, in key order.
    pub fn highlighted_cells(&self) -> impl Iterator<Item = &CellKey> + '_ {
        self.highlighted.iter().filter(|(_, on)| **on).map(|(key, _)| key)
    }

    fn parcel_highlights(&self, parcel_index: usize) -> impl Iterator<Item = &CellKey> + '_ {
        let start = CellKey::parcel_start(parcel_index);
        let entries = match parcel_index.checked_add(1) {
            Some(next) => self.highlighted.range(start..CellKey::parcel_start(next)),
            None => self.highlighted.range(start..),
        };
        entries.filter(|(_, on)| **on).map(|(key, _)| key)
    }
}
