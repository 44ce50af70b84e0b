use std::ops::Range;

use crate::style::{Flex, FlexDir, FlexWrap, Justify};
use glam::{Vec2, vec2};

struct Line {
    items: Range<usize>,
    height: f32,
}

/// Positions already-sized items inside a container `container_width` wide.
///
/// Returns one offset per entry of `sizes`, in the same order. Reverse
/// directions walk the items back to front; columns neither wrap nor
/// justify, and `wrap-reverse` lines always pack from the start.
pub fn align(container_width: f32, sizes: &[Vec2], flex: Flex) -> Vec<Vec2> {
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    if flex.dir.is_reverse() {
        order.reverse();
    }

    let mut positions = vec![Vec2::ZERO; sizes.len()];
    match flex.dir {
        FlexDir::Column | FlexDir::ColumnReverse => {
            let mut y = 0.0;
            for &i in &order {
                positions[i] = vec2(0.0, y);
                y += sizes[i].y;
            }
        }
        FlexDir::Row | FlexDir::RowReverse => {
            let lines = match flex.wrap {
                FlexWrap::NoWrap => vec![Line {
                    items: 0..order.len(),
                    height: order.iter().map(|&i| sizes[i].y).fold(0.0, f32::max),
                }],
                FlexWrap::Wrap | FlexWrap::WrapReverse => {
                    break_lines(container_width, &order, sizes)
                }
            };

            let justify = match flex.wrap {
                FlexWrap::WrapReverse => Justify::Start,
                _ => flex.justify,
            };
            let total_height: f32 = lines.iter().map(|l| l.height).sum();

            let mut y = 0.0;
            for line in &lines {
                let members = &order[line.items.clone()];
                let widths: Vec<f32> = members.iter().map(|&i| sizes[i].x).collect();
                let line_y = if flex.wrap == FlexWrap::WrapReverse {
                    total_height - y - line.height
                } else {
                    y
                };

                for (&i, x) in members.iter().zip(justify_line(container_width, &widths, justify)) {
                    positions[i] = vec2(x, line_y);
                }
                y += line.height;
            }
        }
    }

    positions
}

/// Greedy line breaking: an item that would run past the container edge
/// opens a new line, unless it is the first item of its line.
fn break_lines(container_width: f32, order: &[usize], sizes: &[Vec2]) -> Vec<Line> {
    let mut lines = Vec::new();
    let (mut start, mut cursor, mut height): (usize, f32, f32) = (0, 0.0, 0.0);

    for (n, &i) in order.iter().enumerate() {
        let size = sizes[i];
        if n > start && cursor + size.x > container_width {
            lines.push(Line {
                items: start..n,
                height,
            });
            start = n;
            cursor = 0.0;
            height = 0.0;
        }
        cursor += size.x;
        height = height.max(size.y);
    }

    if start < order.len() {
        lines.push(Line {
            items: start..order.len(),
            height,
        });
    }

    log::debug!("broke {} items into {} lines", order.len(), lines.len());
    lines
}

/// Main-axis offsets for one line of items.
fn justify_line(container_width: f32, widths: &[f32], justify: Justify) -> Vec<f32> {
    let n = widths.len();
    let free = container_width - widths.iter().sum::<f32>();

    let (offset, gap) = match justify {
        Justify::Start | Justify::Stretch => (0.0, 0.0),
        Justify::End => (free, 0.0),
        Justify::Center => (free * 0.5, 0.0),
        Justify::SpaceBetween if n > 1 => (0.0, free / (n - 1) as f32),
        Justify::SpaceBetween => (0.0, 0.0),
        Justify::SpaceAround => {
            let g = free / n.max(1) as f32;
            (g * 0.5, g)
        }
        Justify::SpaceEvenly => {
            let g = free / (n + 1) as f32;
            (g, g)
        }
    };

    let mut cursor = offset;
    widths
        .iter()
        .map(|w| {
            let x = cursor;
            cursor += w + gap;
            x
        })
        .collect()
}
