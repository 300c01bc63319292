use std::time::Instant;

use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Color, Rgb};

/// A render item pairs an element with its effective z_index and tree order.
struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
}

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let start = Instant::now();

    let mut render_list: Vec<RenderItem> = Vec::new();
    collect_elements(element, &mut render_list, 0, element.z_index);

    // Stable sort preserves tree order for equal z_index
    render_list.sort_by_key(|item| (item.z_index, item.tree_order));

    let element_count = render_list.len();
    for item in render_list {
        render_single_element(item.element, layout, buf);
    }

    log::debug!(
        "render: {} elements in {:.2}µs",
        element_count,
        start.elapsed().as_secs_f64() * 1_000_000.0,
    );
}

/// Collect all elements in tree order with their effective z_index.
/// Children inherit the parent's z_index as a minimum.
fn collect_elements<'a>(
    element: &'a Element,
    list: &mut Vec<RenderItem<'a>>,
    tree_order: usize,
    parent_z_index: i16,
) -> usize {
    let mut order = tree_order;
    let effective_z = element.z_index.max(parent_z_index);

    list.push(RenderItem {
        element,
        z_index: effective_z,
        tree_order: order,
    });
    order += 1;

    if let Content::Children(children) = &element.content {
        for child in children {
            order = collect_elements(child, list, order, effective_z);
        }
    }

    order
}

fn render_single_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }
    let rect = *rect;

    if let Some(bg) = &element.style.background {
        fill_rect(buf, rect, bg);
    }

    render_border(element, rect, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, element, rect, buf);
    }
}

/// Paint a background fill. Opaque colors overwrite the covered cells;
/// translucent colors composite over whatever the cells already show.
fn fill_rect(buf: &mut Buffer, rect: Rect, color: &Color) {
    let rgb = color.to_rgb();
    let opaque = color.is_opaque();
    let alpha = color.opacity();

    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                if opaque {
                    if cell.bg == rgb && cell.char == ' ' && !cell.wide_continuation {
                        continue;
                    }
                    cell.char = ' ';
                    cell.bg = rgb;
                    cell.wide_continuation = false;
                } else {
                    cell.bg = rgb.blend_over(cell.bg, alpha);
                    cell.fg = rgb.blend_over(cell.fg, alpha);
                }
            }
        }
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = resolve_fg(element);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    };

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );
    if inner.is_empty() {
        return;
    }

    let fg = resolve_fg(element);

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() || y >= buf.height() {
            break;
        }

        let visible = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;
        for ch in visible.chars() {
            let w = char_width(ch).max(1) as u16;
            if x + w > inner.right() || x >= buf.width() {
                break;
            }
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ch;
                cell.fg = fg;
                cell.style = element.style.text_style;
                cell.wide_continuation = false;
            }
            // Wide characters occupy a continuation cell
            if w == 2 {
                if let Some(cell) = buf.get_mut(x + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                }
            }
            x += w;
        }
    }
}

fn resolve_fg(element: &Element) -> Rgb {
    element
        .style
        .foreground
        .as_ref()
        .map(Color::to_rgb)
        .unwrap_or(Rgb::new(255, 255, 255))
}
