use super::points::{Axis, Point, ReferenceLine};

const MARGIN: f64 = 20.;

/// Data-space extent covering the points and every reference line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(points: &[Point], lines: &[ReferenceLine]) -> Self {
        let xs = points
            .iter()
            .map(|p| p.x)
            .chain(lines.iter().filter(|l| l.axis == Axis::Vertical).map(|l| l.position));
        let ys = points
            .iter()
            .map(|p| p.y)
            .chain(lines.iter().filter(|l| l.axis == Axis::Horizontal).map(|l| l.position));

        let (min_x, max_x) = extent(xs);
        let (min_y, max_y) = extent(ys);
        Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

fn extent(values: impl Iterator<Item = i64>) -> (f64, f64) {
    let (min, max) = values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return (0., 1.);
    }
    let (min, max) = (min as f64, max as f64);
    match min == max {
        true => (min, max + 1.),
        false => (min, max),
    }
}

struct Canvas {
    bounds: Bounds,
    width: f64,
    height: f64,
}

impl Canvas {
    fn x(&self, x: f64) -> f64 {
        let b = &self.bounds;
        MARGIN + (x - b.min_x) / (b.max_x - b.min_x) * (self.width - 2. * MARGIN)
    }

    // y grows upwards
    fn y(&self, y: f64) -> f64 {
        let b = &self.bounds;
        self.height - MARGIN - (y - b.min_y) / (b.max_y - b.min_y) * (self.height - 2. * MARGIN)
    }
}

pub fn render_svg(points: &[Point], lines: &[ReferenceLine], width: u32, height: u32) -> String {
    let canvas = Canvas {
        bounds: Bounds::new(points, lines),
        width: width as f64,
        height: height as f64,
    };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    svg.push('\n');
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    let polyline = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", canvas.x(p.x as f64), canvas.y(p.y as f64)))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        "<polyline fill=\"none\" stroke=\"steelblue\" stroke-width=\"1\" points=\"{}\"/>\n",
        polyline
    ));

    let (left, right) = (MARGIN, canvas.width - MARGIN);
    let (top, bottom) = (MARGIN, canvas.height - MARGIN);
    for line in lines {
        let position = line.position as f64;
        let (x1, y1, x2, y2) = match line.axis {
            Axis::Vertical => (canvas.x(position), top, canvas.x(position), bottom),
            Axis::Horizontal => (left, canvas.y(position), right, canvas.y(position)),
        };
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            x1, y1, x2, y2, line.color
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
