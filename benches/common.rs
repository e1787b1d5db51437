// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

//! Common artifacts for benchmarking.
//!

pub(crate) const TEXT_SAMPLES: [&str; 24] = [
    "T_DURING(INTERVAL(starts_at, ends_at), INTERVAL('2005-01-10', '2010-02-10'))",
    "depth BETWEEN 100.0 and 150.0",
    "\"value\" <= (2 ^ \"foo\")",
    "\"value\" <= 10",
    "\"value\" <> (22.1 * \"foo\")",
    "    eo:cloud_cover >= 0.1\nAND eo:cloud_cover <= 0.2\nAND landsat:wrs_row=28\nAND landsat:wrs_path=203",
    "(owner LIKE 'mike%' OR owner LIKE 'Mike%') AND floors<4",
    "floors>5 AND S_WITHIN(geometry,BBOX(-118,33.8,-117.9,34))",
    "eo:cloud_cover IN (0.1,0.2)",
    "owner NOT LIKE '%Mike%'",
    "Foo(\"geometry\") = TRUE",
    "\"value\" = (2 / \"foo\")",
    "ACCENTI(etat_vol) = ACCENTI('débárquér')",
    "A_EQUALS(('a', TRUE, 1.0, 8), \"values\")",
    "name LIKE 'Smith%'",
    "\"value\" NOT IN ('a', 'b', 'c')",
    "T_DURING(INTERVAL(touchdown, liftOff), INTERVAL('1969-07-16T13:32:00Z', '1969-07-24T16:50:35Z'))",
    "swimming_pool=true AND (floors>5 \n                    OR  material LIKE 'brick%'\n                    OR  material LIKE '%brick')",
    "avg(windSpeed) < 4",
    "S_CROSSES(road,POLYGON((43.7286 -79.2986, 43.7311 -79.2996, 43.7323 -79.2972,\n                        43.7326 -79.2971, 43.7350 -79.2981, 43.7350 -79.2982,\n                        43.7352 -79.2982, 43.7357 -79.2956, 43.7337 -79.2948,\n                        43.7343 -79.2933, 43.7339 -79.2923, 43.7327 -79.2947,\n                        43.7320 -79.2942, 43.7322 -79.2937, 43.7306 -79.2930,\n                        43.7303 -79.2930, 43.7299 -79.2928, 43.7286 -79.2986)))",
    "T_MEETS(INTERVAL('2005-01-10', '2010-02-10'), INTERVAL(starts_at, ends_at))",
    "\"name\" NOT LIKE 'foo%' AND \"value\" > 10",
    "value = - foo * 2.0 + \"bar\" / 6.1234 - \"x\" ^ 2.0",
    "NOT \"value\" IS NULL",
];

pub(crate) const JSON_SAMPLES: [&str; 6] = [
    r#"{"op": "=", "args": [{"property": "prop1"}, 5.0]}"#,
    r#"{"op": "not", "args": [{"op": "between", "args": [{"property": "foo"}, 1.0, 10.0]}]}"#,
    r#"{"op": "s_intersects", "args": [{"property": "geom"}, {"type": "Point", "coordinates": [1.0, 2.0]}]}"#,
    r#"{"op": "like", "args": [{"property": "name"}, {"op": "casei", "args": ["abc%"]}]}"#,
    r#"{"op": "or", "args": [{"op": "and", "args": [{"op": ">", "args": [{"property": "floors"}, 5.0]}, {"op": "=", "args": [{"property": "material"}, "brick"]}]}, {"op": "=", "args": [{"property": "swimming_pool"}, true]}]}"#,
    r#"{"op": "t_during", "args": [{"interval": [{"property": "starts_at"}, {"property": "ends_at"}]}, {"interval": ["2005-01-10", "2010-02-10"]}]}"#,
];
