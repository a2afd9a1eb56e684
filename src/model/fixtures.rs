// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::parcel::{CurveSegment, LineSegment, ParcelRecord, SegmentRecord};

/// The two-parcel sample report shown by `--demo`.
pub fn sample_parcels() -> Vec<ParcelRecord> {
    vec![
        ParcelRecord::new("Parcel A")
            .with_area("15,234.56 sq ft")
            .with_perimeter("1,234.50 ft")
            .with_closure_error(0.01)
            .with_precision(291872.202)
            .with_direction_error("N 89°59'59\" E")
            .with_segments(vec![
                SegmentRecord::Line(LineSegment::new(1, "N 45°00'00\" E", "250.00 ft")),
                SegmentRecord::Curve(
                    CurveSegment::new(
                        2,
                        "S 45°00'00\" E",
                        "300.00 ft",
                        "22°30'00\"",
                        "100.00 ft",
                        "39.27 ft",
                    )
                    .with_chord("98.00 ft"),
                ),
            ]),
        ParcelRecord::new("Parcel B")
            .with_area("10,000.00 sq ft")
            .with_perimeter("1,000.00 ft")
            .with_closure_error(0.02)
            .with_precision(15483.202)
            .with_direction_error("S 45°00'00\" W")
            .with_segments(vec![
                SegmentRecord::Line(LineSegment::new(1, "N 30°00'00\" W", "200.00 ft")),
                SegmentRecord::Curve(
                    CurveSegment::new(
                        2,
                        "S 60°00'00\" E",
                        "300.00 ft",
                        "22°30'00\"",
                        "100.00 ft",
                        "39.27 ft",
                    )
                    .with_chord("95.00 ft"),
                ),
            ]),
    ]
}

/// A synthetic report with `parcels` parcels of `segments` alternating line/curve legs.
pub fn synthetic_parcels(parcels: usize, segments: usize) -> Vec<ParcelRecord> {
    (0..parcels)
        .map(|parcel_idx| {
            let legs = (0..segments)
                .map(|seg_idx| {
                    let line_no = u32::try_from(seg_idx + 1).unwrap_or(u32::MAX);
                    if seg_idx % 2 == 0 {
                        SegmentRecord::Line(LineSegment::new(
                            line_no,
                            format!("N {:02}°00'00\" E", seg_idx % 90),
                            format!("{}.00 ft", 100 + seg_idx),
                        ))
                    } else {
                        SegmentRecord::Curve(CurveSegment::new(
                            line_no,
                            "S 45°00'00\" E",
                            "300.00 ft",
                            "22°30'00\"",
                            "100.00 ft",
                            "39.27 ft",
                        ))
                    }
                })
                .collect();
            ParcelRecord::new(format!("Parcel {parcel_idx}"))
                .with_area("1,000.00 sq ft")
                .with_perimeter("400.00 ft")
                .with_closure_error(0.001 * (parcel_idx as f64 + 1.0))
                .with_precision(10_000.0 + parcel_idx as f64)
                .with_direction_error("N 0°00'00\" E")
                .with_segments(legs)
        })
        .collect()
}
