//! Hand-drawn US basemap. Coordinates are (lat, lon) in degrees and are
//! deliberately approximate.

/// State border segments as (lat1, lon1, lat2, lon2). Draw order matters.
#[rustfmt::skip]
pub(crate) const STATE_BORDERS: &[(f64, f64, f64, f64)] = &[
    (49.0, -117.03, 49.0, -123.0), (49.0, -123.0, 48.5, -124.7),
    (48.5, -124.7, 46.0, -124.0), (46.0, -124.0, 46.0, -117.03),
    (46.0, -117.03, 49.0, -117.03), (46.0, -117.03, 46.0, -124.0),
    (46.0, -124.0, 42.0, -124.4), (42.0, -124.4, 42.0, -117.02),
    (42.0, -117.02, 45.5, -117.02), (45.5, -117.02, 46.0, -117.03),
    (42.0, -120.0, 42.0, -124.4), (42.0, -120.0, 39.0, -120.0),
    (39.0, -120.0, 35.0, -119.5), (35.0, -119.5, 35.0, -114.6),
    (35.0, -114.6, 32.5, -114.5), (32.5, -114.5, 32.5, -117.1),
    (32.5, -117.1, 42.0, -124.4), (49.0, -117.03, 49.0, -116.05),
    (49.0, -116.05, 44.5, -111.05), (44.5, -111.05, 42.0, -111.05),
    (42.0, -111.05, 42.0, -114.0), (42.0, -114.0, 42.0, -117.02),
    (42.0, -117.02, 49.0, -117.03), (42.0, -120.0, 42.0, -114.0),
    (42.0, -114.0, 37.0, -114.0), (37.0, -114.0, 35.0, -114.6),
    (35.0, -114.6, 35.0, -120.0), (35.0, -120.0, 39.0, -120.0),
    (39.0, -120.0, 42.0, -120.0), (42.0, -114.0, 42.0, -111.05),
    (42.0, -111.05, 41.0, -111.05), (41.0, -111.05, 41.0, -109.05),
    (41.0, -109.05, 37.0, -109.05), (37.0, -109.05, 37.0, -114.0),
    (37.0, -114.0, 42.0, -114.0), (37.0, -114.0, 37.0, -109.05),
    (37.0, -109.05, 31.33, -109.05), (31.33, -109.05, 31.33, -111.07),
    (31.33, -111.07, 31.33, -114.81), (31.33, -114.81, 32.5, -114.5),
    (32.5, -114.5, 35.0, -114.6), (35.0, -114.6, 37.0, -114.0),
    (49.0, -116.05, 49.0, -104.03), (49.0, -104.03, 45.0, -104.03),
    (45.0, -104.03, 45.0, -111.05), (45.0, -111.05, 48.5, -116.05),
    (48.5, -116.05, 49.0, -116.05), (45.0, -111.05, 45.0, -104.05),
    (45.0, -104.05, 41.0, -104.05), (41.0, -104.05, 41.0, -111.05),
    (41.0, -111.05, 45.0, -111.05), (41.0, -109.05, 41.0, -102.05),
    (41.0, -102.05, 37.0, -102.05), (37.0, -102.05, 37.0, -109.05),
    (37.0, -109.05, 41.0, -109.05), (37.0, -109.05, 37.0, -103.0),
    (37.0, -103.0, 32.0, -103.0), (32.0, -103.0, 32.0, -106.5),
    (32.0, -106.5, 31.78, -106.5), (31.78, -106.5, 31.78, -108.2),
    (31.78, -108.2, 31.33, -109.05), (31.33, -109.05, 37.0, -109.05),
    (49.0, -104.03, 49.0, -97.23), (49.0, -97.23, 45.94, -96.56),
    (45.94, -96.56, 45.94, -104.03), (45.94, -104.03, 49.0, -104.03),
    (45.94, -104.03, 45.94, -96.44), (45.94, -96.44, 43.5, -96.44),
    (43.5, -96.44, 43.0, -96.44), (43.0, -96.44, 43.0, -104.05),
    (43.0, -104.05, 45.94, -104.03), (43.0, -104.05, 43.0, -96.44),
    (43.0, -96.44, 40.0, -95.31), (40.0, -95.31, 40.0, -102.05),
    (40.0, -102.05, 41.0, -102.05), (41.0, -102.05, 41.0, -104.05),
    (41.0, -104.05, 43.0, -104.05), (40.0, -102.05, 40.0, -94.62),
    (40.0, -94.62, 39.0, -94.62), (39.0, -94.62, 37.0, -94.62),
    (37.0, -94.62, 37.0, -102.05), (37.0, -102.05, 40.0, -102.05),
    (49.0, -97.23, 49.0, -95.15), (49.0, -95.15, 49.0, -89.53),
    (48.0, -89.53, 47.5, -92.3), (47.5, -92.3, 46.5, -92.3),
    (46.5, -92.3, 45.5, -92.3), (45.5, -92.3, 43.5, -91.22),
    (43.5, -91.22, 43.5, -96.44), (43.5, -96.44, 45.94, -96.56),
    (45.94, -96.56, 49.0, -97.23), (43.5, -96.44, 43.5, -91.22),
    (43.5, -91.22, 42.5, -90.64), (42.5, -90.64, 40.38, -91.41),
    (40.38, -91.41, 40.58, -95.77), (40.58, -95.77, 43.0, -96.44),
    (43.0, -96.44, 43.5, -96.44), (40.58, -95.77, 40.38, -91.41),
    (40.38, -91.41, 36.5, -89.5), (36.5, -89.5, 36.0, -89.5),
    (36.0, -89.5, 36.5, -90.37), (36.5, -90.37, 36.5, -94.62),
    (36.5, -94.62, 37.0, -94.62), (37.0, -94.62, 39.0, -94.62),
    (39.0, -94.62, 40.58, -95.77), (46.5, -92.3, 45.5, -92.3),
    (45.5, -92.3, 43.5, -91.22), (43.5, -91.22, 42.5, -90.64),
    (42.5, -90.64, 42.5, -87.02), (42.5, -87.02, 45.0, -87.0),
    (45.0, -87.0, 45.5, -88.0), (45.5, -88.0, 46.5, -90.0),
    (46.5, -90.0, 46.5, -92.3), (42.5, -90.64, 42.5, -87.02),
    (42.5, -87.02, 41.76, -87.53), (41.76, -87.53, 39.0, -87.5),
    (39.0, -87.5, 37.0, -88.1), (37.0, -88.1, 37.0, -89.15),
    (37.0, -89.15, 36.5, -89.5), (36.5, -89.5, 40.38, -91.41),
    (40.38, -91.41, 42.5, -90.64), (45.0, -87.0, 45.5, -88.0),
    (45.5, -88.0, 46.5, -90.0), (46.5, -90.0, 47.5, -89.0),
    (42.0, -86.5, 45.0, -87.0), (41.76, -84.8, 42.0, -83.0),
    (42.0, -83.0, 42.5, -82.4), (41.76, -87.53, 41.76, -84.8),
    (41.76, -84.8, 39.0, -84.8), (39.0, -84.8, 38.0, -86.0),
    (38.0, -86.0, 37.0, -88.1), (37.0, -88.1, 39.0, -87.5),
    (39.0, -87.5, 41.76, -87.53), (41.76, -84.8, 41.97, -80.52),
    (41.97, -80.52, 40.64, -80.52), (40.64, -80.52, 39.0, -81.0),
    (39.0, -81.0, 38.5, -82.0), (38.5, -82.0, 38.5, -84.8),
    (38.5, -84.8, 39.0, -84.8), (39.0, -84.8, 41.76, -84.8),
    (36.5, -103.0, 36.5, -100.0), (36.5, -100.0, 34.0, -100.0),
    (34.0, -100.0, 33.5, -94.04), (33.5, -94.04, 31.17, -94.04),
    (31.17, -94.04, 29.5, -93.84), (29.5, -93.84, 26.0, -97.14),
    (26.0, -97.14, 25.84, -97.14), (25.84, -97.14, 31.78, -106.5),
    (31.78, -106.5, 32.0, -106.5), (32.0, -106.5, 32.0, -103.0),
    (32.0, -103.0, 36.5, -103.0), (37.0, -103.0, 37.0, -94.62),
    (37.0, -94.62, 36.5, -94.62), (36.5, -94.62, 35.0, -94.43),
    (35.0, -94.43, 33.5, -94.04), (33.5, -94.04, 34.0, -100.0),
    (34.0, -100.0, 36.5, -100.0), (36.5, -100.0, 36.5, -103.0),
    (36.5, -103.0, 37.0, -103.0), (36.5, -94.62, 36.5, -90.37),
    (36.5, -90.37, 35.0, -90.0), (35.0, -90.0, 35.0, -91.0),
    (35.0, -91.0, 33.0, -91.2), (33.0, -91.2, 33.0, -94.04),
    (33.0, -94.04, 35.0, -94.43), (35.0, -94.43, 36.5, -94.62),
    (33.0, -94.04, 33.0, -91.2), (33.0, -91.2, 31.0, -91.5),
    (31.0, -91.5, 30.0, -89.5), (30.0, -89.5, 29.0, -89.0),
    (29.0, -89.0, 29.5, -93.84), (29.5, -93.84, 31.17, -94.04),
    (31.17, -94.04, 33.0, -94.04), (35.0, -91.0, 35.0, -88.2),
    (35.0, -88.2, 31.0, -88.47), (31.0, -88.47, 30.0, -89.5),
    (30.0, -89.5, 31.0, -91.5), (31.0, -91.5, 35.0, -91.0),
    (35.0, -88.2, 35.0, -85.0), (35.0, -85.0, 32.9, -85.0),
    (32.9, -85.0, 31.0, -85.0), (31.0, -85.0, 30.0, -87.5),
    (30.0, -87.5, 30.0, -88.47), (30.0, -88.47, 31.0, -88.47),
    (31.0, -88.47, 35.0, -88.2), (36.5, -90.37, 36.5, -81.65),
    (36.5, -81.65, 35.0, -84.32), (35.0, -84.32, 35.0, -85.0),
    (35.0, -85.0, 35.0, -88.2), (35.0, -88.2, 35.0, -90.0),
    (35.0, -90.0, 36.5, -90.37), (39.0, -84.8, 38.5, -84.8),
    (38.5, -84.8, 38.5, -82.0), (38.5, -82.0, 37.5, -82.5),
    (37.5, -82.5, 36.5, -83.68), (36.5, -83.68, 36.5, -89.5),
    (36.5, -89.5, 37.0, -89.15), (37.0, -89.15, 37.0, -88.1),
    (37.0, -88.1, 38.0, -86.0), (38.0, -86.0, 39.0, -84.8),
    (31.0, -87.5, 31.0, -85.0), (31.0, -85.0, 30.5, -84.86),
    (30.5, -84.86, 30.0, -82.0), (30.0, -82.0, 25.0, -80.0),
    (25.0, -80.0, 24.5, -81.8), (24.5, -81.8, 30.0, -87.5),
    (30.0, -87.5, 31.0, -87.5), (35.0, -85.0, 35.0, -83.5),
    (35.0, -83.5, 32.0, -81.0), (32.0, -81.0, 30.5, -81.5),
    (30.5, -81.5, 30.0, -82.0), (30.0, -82.0, 30.5, -84.86),
    (30.5, -84.86, 32.9, -85.0), (32.9, -85.0, 35.0, -85.0),
    (35.0, -83.5, 35.2, -80.5), (35.2, -80.5, 33.5, -79.0),
    (33.5, -79.0, 32.0, -81.0), (32.0, -81.0, 35.0, -83.5),
    (36.5, -83.68, 36.5, -75.5), (36.5, -75.5, 35.5, -75.5),
    (35.5, -75.5, 33.5, -79.0), (33.5, -79.0, 35.2, -80.5),
    (35.2, -80.5, 35.0, -84.32), (35.0, -84.32, 36.5, -83.68),
    (39.0, -77.52, 39.0, -75.5), (39.0, -75.5, 38.0, -75.5),
    (38.0, -75.5, 36.5, -75.5), (36.5, -75.5, 36.5, -83.68),
    (36.5, -83.68, 37.5, -82.5), (37.5, -82.5, 39.0, -80.52),
    (39.0, -80.52, 39.0, -77.52), (40.64, -80.52, 39.72, -79.48),
    (39.72, -79.48, 39.0, -77.52), (39.0, -77.52, 39.0, -80.52),
    (39.0, -80.52, 37.5, -82.5), (37.5, -82.5, 38.5, -82.0),
    (38.5, -82.0, 39.0, -81.0), (39.0, -81.0, 40.64, -80.52),
    (42.0, -80.52, 42.0, -79.76), (42.0, -79.76, 41.99, -75.35),
    (41.99, -75.35, 41.0, -75.1), (41.0, -75.1, 39.72, -75.79),
    (39.72, -75.79, 39.72, -79.48), (39.72, -79.48, 40.64, -80.52),
    (40.64, -80.52, 42.0, -80.52), (45.01, -74.75, 45.01, -71.5),
    (45.01, -71.5, 42.73, -71.5), (42.73, -71.5, 42.0, -73.35),
    (42.0, -73.35, 41.0, -73.9), (41.0, -73.9, 40.7, -74.0),
    (40.7, -74.0, 41.0, -75.1), (41.0, -75.1, 41.99, -75.35),
    (41.99, -75.35, 42.0, -79.76), (42.0, -79.76, 45.01, -74.75),
    (41.36, -74.7, 41.0, -73.9), (41.0, -73.9, 40.7, -74.0),
    (40.7, -74.0, 39.0, -74.5), (39.0, -74.5, 38.8, -75.2),
    (38.8, -75.2, 39.72, -75.79), (39.72, -75.79, 41.0, -75.1),
    (41.0, -75.1, 41.36, -74.7), (39.84, -75.79, 39.72, -75.79),
    (39.72, -75.79, 38.8, -75.2), (38.8, -75.2, 38.45, -75.05),
    (38.45, -75.05, 38.45, -75.79), (38.45, -75.79, 39.84, -75.79),
    (39.72, -79.48, 39.72, -75.79), (39.72, -75.79, 38.45, -75.79),
    (38.45, -75.79, 38.0, -76.0), (38.0, -76.0, 38.0, -77.0),
    (38.0, -77.0, 39.0, -77.52), (39.0, -77.52, 39.72, -79.48),
    (42.05, -73.48, 42.05, -71.8), (42.05, -71.8, 41.3, -71.85),
    (41.3, -71.85, 41.0, -72.0), (41.0, -72.0, 41.0, -73.9),
    (41.0, -73.9, 42.0, -73.35), (42.0, -73.35, 42.05, -73.48),
    (42.01, -71.38, 42.01, -71.12), (42.01, -71.12, 41.3, -71.12),
    (41.3, -71.12, 41.3, -71.85), (41.3, -71.85, 42.01, -71.8),
    (42.01, -71.8, 42.01, -71.38), (42.88, -73.26, 42.75, -71.0),
    (42.75, -71.0, 42.88, -70.5), (42.88, -70.5, 42.0, -70.0),
    (42.0, -70.0, 41.5, -71.12), (41.5, -71.12, 42.01, -71.38),
    (42.01, -71.38, 42.05, -71.8), (42.05, -71.8, 42.05, -73.48),
    (42.05, -73.48, 42.88, -73.26), (45.01, -71.5, 45.01, -73.35),
    (45.01, -73.35, 42.73, -73.26), (42.73, -73.26, 42.73, -72.46),
    (42.73, -72.46, 42.73, -71.5), (42.73, -71.5, 45.01, -71.5),
    (45.3, -71.08, 45.3, -71.0), (45.3, -71.0, 42.88, -70.5),
    (42.88, -70.5, 42.75, -71.0), (42.75, -71.0, 42.73, -72.46),
    (42.73, -72.46, 45.01, -71.5), (45.01, -71.5, 45.3, -71.08),
    (47.46, -69.23, 45.3, -71.08), (45.3, -71.08, 45.3, -71.0),
    (45.3, -71.0, 42.88, -70.5), (42.88, -70.5, 43.5, -70.0),
    (43.5, -70.0, 45.0, -67.0), (45.0, -67.0, 47.46, -69.23),
    (71.5, -156.5, 71.5, -141.0), (71.5, -141.0, 54.5, -130.0),
    (54.5, -130.0, 54.5, -173.0), (54.5, -173.0, 71.5, -156.5),
    (22.2, -159.8, 22.2, -159.3), (22.2, -159.3, 21.8, -159.3),
    (21.8, -159.3, 21.8, -159.8), (21.8, -159.8, 22.2, -159.8),
    (21.1, -156.3, 21.1, -155.9), (21.1, -155.9, 20.5, -155.9),
    (20.5, -155.9, 20.5, -156.7), (20.5, -156.7, 21.1, -156.3),
    (21.7, -158.3, 21.7, -157.6), (21.7, -157.6, 21.2, -157.6),
    (21.2, -157.6, 21.2, -158.3), (21.2, -158.3, 21.7, -158.3),
    (19.7, -156.1, 19.7, -154.8), (19.7, -154.8, 18.9, -154.8),
    (18.9, -154.8, 18.9, -156.1), (18.9, -156.1, 19.7, -156.1),
];

#[rustfmt::skip]
pub(crate) const STATE_LABELS: &[(f64, f64, &str)] = &[
    (44.5, -100.0, "SD"), (41.5, -99.0, "NE"), (42.0, -93.5, "IA"),
    (46.0, -94.5, "MN"), (43.0, -89.5, "WI"), (40.0, -89.0, "IL"),
    (38.5, -98.5, "KS"), (39.0, -105.5, "CO"), (44.0, -107.5, "WY"),
    (47.0, -110.0, "MT"), (46.5, -100.5, "ND"), (38.5, -92.5, "MO"),
    (35.0, -97.5, "OK"), (31.0, -99.0, "TX"), (40.5, -112.0, "UT"),
    (39.0, -119.5, "NV"), (37.5, -119.5, "CA"), (44.0, -120.5, "OR"),
    (47.5, -120.5, "WA"), (43.5, -114.0, "ID"), (34.5, -106.0, "NM"),
    (34.5, -112.0, "AZ"), (42.5, -72.5, "VT"), (43.5, -71.5, "NH"),
    (42.3, -71.8, "MA"), (41.7, -71.5, "RI"), (41.6, -72.7, "CT"),
    (43.0, -75.5, "NY"), (40.5, -74.5, "NJ"), (41.0, -77.5, "PA"),
    (39.0, -75.5, "DE"), (39.0, -76.5, "MD"), (38.0, -79.5, "VA"),
    (35.5, -79.5, "NC"), (34.0, -81.0, "SC"), (33.0, -83.5, "GA"),
    (30.5, -84.5, "FL"), (32.5, -86.5, "AL"), (32.5, -90.0, "MS"),
    (31.0, -92.0, "LA"), (35.0, -86.0, "TN"), (37.5, -84.5, "KY"),
    (40.0, -82.5, "OH"), (40.0, -86.0, "IN"), (42.0, -84.5, "MI"),
    (38.5, -81.0, "WV"), (35.5, -92.5, "AR"),
];

pub(crate) type Path = &'static [(f64, f64)];

#[rustfmt::skip]
pub(crate) const RIVERS: &[Path] = &[
    // Mississippi
    &[
        (47.5, -94.5), (46.0, -94.0), (44.0, -92.0), (42.0, -90.5),
        (40.0, -90.0), (38.0, -89.5), (36.0, -89.5), (34.0, -90.5),
        (32.0, -91.0), (30.0, -91.0), (29.0, -89.5),
    ],
    // Missouri
    &[
        (46.0, -111.5), (45.5, -110.0), (44.5, -108.0), (43.5, -104.0),
        (42.5, -100.0), (41.5, -96.0), (40.0, -95.0), (39.0, -93.5),
        (38.5, -90.5),
    ],
    // Colorado
    &[
        (36.0, -114.5), (35.5, -113.0), (34.5, -111.0), (33.5, -109.0),
        (32.5, -107.5), (31.5, -105.5),
    ],
    // Rio Grande
    &[
        (37.0, -107.0), (36.0, -106.0), (34.0, -106.5), (32.0, -106.5),
        (30.0, -104.0), (28.0, -102.0), (26.0, -99.0), (25.8, -97.2),
    ],
];

#[rustfmt::skip]
pub(crate) const MOUNTAINS: &[Path] = &[
    // Rockies
    &[
        (49.0, -114.0), (47.0, -113.5), (45.0, -112.5), (43.0, -109.0),
        (41.0, -105.5), (39.0, -105.5), (37.0, -105.0), (35.0, -106.0),
    ],
    // Cascades
    &[
        (49.0, -121.5), (47.5, -121.5), (46.0, -121.7), (44.0, -122.0),
        (42.0, -122.2), (40.5, -122.0),
    ],
    // Sierra Nevada
    &[(40.5, -121.0), (39.0, -120.5), (37.5, -119.0), (36.0, -118.0)],
    // Appalachians
    &[
        (44.0, -71.5), (42.0, -73.5), (40.0, -75.5), (38.0, -78.5),
        (36.0, -81.5), (34.5, -83.5),
    ],
];

/// A coastline that is only drawn when the map centre satisfies `visible`.
pub(crate) struct Coast {
    pub(crate) path: Path,
    pub(crate) visible: fn(f64, f64) -> bool,
}

#[rustfmt::skip]
pub(crate) const COASTS: &[Coast] = &[
    Coast {
        // Atlantic
        path: &[
            (45.0, -67.0), (44.0, -68.0), (42.5, -70.0), (41.0, -71.0),
            (40.5, -73.5), (39.0, -74.0), (37.5, -75.5), (36.0, -76.0),
            (34.0, -78.0), (32.0, -80.0), (30.0, -81.0), (28.0, -80.5),
            (25.5, -80.0), (24.5, -81.5),
        ],
        visible: |_lat, lon| lon > -85.0,
    },
    Coast {
        // Pacific
        path: &[
            (48.5, -124.7), (47.0, -124.0), (45.0, -124.0), (43.0, -124.4),
            (41.0, -124.2), (39.0, -123.8), (37.0, -122.5), (35.0, -121.0),
            (33.5, -118.0), (32.5, -117.2),
        ],
        visible: |_lat, lon| lon < -115.0,
    },
    Coast {
        // Gulf
        path: &[
            (30.0, -87.5), (29.5, -89.0), (29.0, -91.0), (28.5, -93.0),
            (27.5, -95.0), (26.5, -97.0), (25.8, -97.2),
        ],
        visible: |lat, lon| lat < 33.0 && lon > -98.0,
    },
];

/// Shoreline vertices, plotted as points rather than joined.
#[rustfmt::skip]
pub(crate) const LAKE_SUPERIOR: &[(f64, f64)] = &[
    (48.0, -89.5), (47.5, -91.0), (46.5, -92.0), (46.5, -94.0),
    (47.0, -92.5), (47.5, -90.5), (48.0, -89.5),
];

pub(crate) fn in_great_lakes_region(lat: f64, lon: f64) -> bool {
    lon > -93.0 && lon < -75.0 && lat > 41.0 && lat < 49.0
}

pub(crate) fn shows_lake_superior(lat: f64) -> bool {
    lat > 46.0
}

pub(crate) fn shows_lake_michigan(lon: f64) -> bool {
    lon > -88.0 && lon < -85.0
}

/// Lake Michigan is sketched as a north-south run of points east of centre.
pub(crate) fn lake_michigan_points(lat: f64, lon: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..=8).map(move |i| (lat - 2.0 + 0.5 * i as f64, lon + 1.5))
}
