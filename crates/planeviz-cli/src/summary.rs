//! Small JSON summaries printed to stdout after each command.

use planeviz::affine::{AffineFrame, EigenResult};
use planeviz::sheet::{SheetFrame, SheetPoly};
use planeviz::Vec2;
use serde_json::{json, Value};

fn point(p: &Vec2<f64>) -> Value {
    json!([p.x, p.y])
}

fn polygon(poly: &SheetPoly) -> Value {
    Value::Array(poly.v.iter().map(point).collect())
}

fn eigen(e: &EigenResult) -> Value {
    match e {
        EigenResult::Complex { real, imag } => json!({
            "kind": "complex",
            "real": real,
            "imag": imag,
        }),
        EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            v2,
        } => json!({
            "kind": "real",
            "lambda1": lambda1,
            "lambda2": lambda2,
            "v1": point(v1),
            "v2": point(v2),
        }),
    }
}

pub fn affine(frame: &AffineFrame) -> Value {
    let m = &frame.map.m;
    json!({
        "matrix": [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]],
        "translation": point(&frame.map.t),
        "det": frame.det,
        "eigen": eigen(&frame.eigen),
        "basis": [point(&frame.basis.0), point(&frame.basis.1)],
        "points": frame.points.len(),
    })
}

pub fn sheet(frame: &SheetFrame) -> Value {
    json!({
        "base": polygon(&frame.base),
        "placed": polygon(&frame.placed),
        "stops": frame.stops.len(),
        "touching": frame.stops.iter().flatten().count(),
    })
}
