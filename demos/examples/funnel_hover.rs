// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel layout, drawing, hover and legend toggling end to end.
//!
//! This example shows how to combine:
//! - `funnel_layout` to sort a dataset and compute its bands,
//! - `funnel_shape`'s `DrawContext` to render them (here as SVG paths),
//! - `funnel_hit` parameters for tolerant pointer queries.
//!
//! Run:
//! - `cargo run -p funnel_demos --example funnel_hover`
//! - `RUST_LOG=funnel_layout=trace cargo run -p funnel_demos --example funnel_hover`

use std::fmt::Write as _;

use funnel_hit::HitParams;
use funnel_layout::{Dataset, FunnelLayout, FunnelOptions, Row, legend_items};
use funnel_shape::DrawContext;
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

/// Collects drawing calls as SVG `<path>` elements.
#[derive(Default)]
struct SvgSink {
    out: String,
    d: String,
    fill: String,
    stroke: String,
    line_width: f64,
}

impl DrawContext for SvgSink {
    type Color = str;

    fn begin_path(&mut self) {
        self.d.clear();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill = color.to_owned();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke = color.to_owned();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn move_to(&mut self, p: Point) {
        let _ = write!(self.d, "M{:.1},{:.1} ", p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.d, "L{:.1},{:.1} ", p.x, p.y);
    }

    fn fill(&mut self) {
        let _ = writeln!(
            self.out,
            r#"  <path d="{}Z" fill="{}"/>"#,
            self.d.trim_end(),
            self.fill
        );
    }

    fn stroke(&mut self) {
        let _ = writeln!(
            self.out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.d.trim_end(),
            self.stroke,
            self.line_width
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Options arrive from the host as a JSON object.
    let options: FunnelOptions = serde_json::from_str(
        r#"{ "sort": "desc", "gap": 4, "topWidth": 40, "keep": "auto", "borderWidth": 1 }"#,
    )
    .expect("valid funnel options");
    let engine = FunnelLayout::new(options);

    let mut data: Dataset = [
        ("Visits", 300.0, "#FF6384"),
        ("Signups", 50.0, "#36A2EB"),
        ("Trials", 100.0, "#FFCE56"),
    ]
    .into_iter()
    .map(|(label, value, color)| {
        Row::new(value)
            .with_label(label)
            .with_background_color(color)
            .with_border_color("#222")
    })
    .collect();
    engine.sort(&mut data);

    let area = Rect::new(0.0, 0.0, 400.0, 300.0);
    let funnel = engine.layout(&data, area);

    println!("== Bands (row height {:.2}) ==", funnel.row_height());
    for e in funnel.elements() {
        let t = &e.trapezium;
        println!(
            "  #{} {:<8} y={:>6.1}..{:<6.1} top={:>6.1} base={:>6.1} area={:.0}",
            e.index,
            e.label.as_deref().unwrap_or(""),
            t.y,
            t.base,
            t.upper_width,
            t.bottom_width,
            t.area()
        );
    }

    let mut svg = SvgSink::default();
    funnel.draw(&mut svg);
    println!("\n== SVG ==\n<svg viewBox=\"0 0 400 300\">\n{}</svg>", svg.out);

    let params = HitParams {
        fill_tolerance: 2.0,
        ..HitParams::default()
    };
    for (what, pt) in [
        ("center of the top band", Point::new(200.0, 40.0)),
        ("near the tip", Point::new(200.0, 290.0)),
        ("outside the funnel", Point::new(5.0, 290.0)),
    ] {
        match funnel.element_at(pt, &params) {
            Some(e) => {
                let tip = e.tooltip();
                println!(
                    "\n{what} @ ({:.0}, {:.0}): {} (anchor {:.1}, {:.1})",
                    pt.x, pt.y, tip.label, tip.anchor.x, tip.anchor.y
                );
            }
            None => println!("\n{what} @ ({:.0}, {:.0}): no band", pt.x, pt.y),
        }
        println!("  label-mode rows at x={:.0}: {:?}", pt.x, funnel.label_hits(pt.x));
    }

    // Clicking a legend entry hides its row; the rest re-flow.
    let items = legend_items(&data, engine.options());
    let clicked = &items[1];
    clicked.toggle(&mut data);
    let funnel = engine.layout(&data, area);
    println!(
        "\nAfter hiding {:?}: {} visible rows, row height {:.2}",
        clicked.text,
        funnel.visible_count(),
        funnel.row_height()
    );
}
