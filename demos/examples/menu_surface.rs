// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open a menu surface against an in-memory page and walk its focus ring.
//!
//! The page is a toolbar button (the anchor) near the right edge of a small
//! window, with a three-item menu. The menu asks for `BottomStart`, does not
//! fit to the right of the anchor, and flips.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_surface`

use kurbo::{Rect, Size, Vec2};
use understory_focus::{ElementFlags, ElementInfo, ElementKind, FocusHost, collect_focusable};
use understory_menu_surface::{
    Corner, Key, KeyInput, Margin, MenuSurface, Placement, SurfaceConfig, SurfaceEvent,
    SurfaceHost,
};

#[derive(Debug)]
struct Node {
    name: &'static str,
    parent: Option<usize>,
    info: ElementInfo,
}

#[derive(Debug)]
struct Page {
    nodes: Vec<Node>,
    focused: Option<usize>,
    anchor: usize,
    surface: usize,
    hoisted: bool,
}

impl Page {
    fn build() -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            focused: None,
            anchor: 0,
            surface: 0,
            hoisted: false,
        };
        let body = page.add("body", None, ElementInfo::new(ElementKind::Other));
        page.anchor = page.add("toolbar-button", Some(body), ElementInfo::new(ElementKind::Button));
        page.surface = page.add("menu", Some(page.anchor), ElementInfo::new(ElementKind::Other));
        let list = page.add("list", Some(page.surface), ElementInfo::new(ElementKind::Other));
        page.add(
            "item-open",
            Some(list),
            ElementInfo::new(ElementKind::Other).with_tab_index(0),
        );
        page.add(
            "item-disabled",
            Some(list),
            ElementInfo::new(ElementKind::Other)
                .with_tab_index(-1)
                .with_flags(ElementFlags::ARIA_DISABLED),
        );
        page.add(
            "item-save",
            Some(list),
            ElementInfo::new(ElementKind::Other).with_tab_index(0),
        );
        page.add(
            "help-link",
            Some(page.surface),
            ElementInfo::new(ElementKind::Link).with_flags(ElementFlags::HREF),
        );
        page.focused = Some(page.anchor);
        page
    }

    fn add(&mut self, name: &'static str, parent: Option<usize>, info: ElementInfo) -> usize {
        self.nodes.push(Node { name, parent, info });
        self.nodes.len() - 1
    }

    fn name(&self, node: Option<usize>) -> &'static str {
        node.map_or("<none>", |n| self.nodes[n].name)
    }
}

impl FocusHost for Page {
    type Node = usize;

    fn focused(&self) -> Option<usize> {
        self.focused
    }

    fn visit_descendants(&self, root: usize, visit: &mut dyn FnMut(usize, &ElementInfo)) {
        for (i, node) in self.nodes.iter().enumerate() {
            if i != root && self.contains(root, i) {
                visit(i, &node.info);
            }
        }
    }

    fn contains(&self, ancestor: usize, node: usize) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.nodes[n].parent;
        }
        false
    }

    fn can_focus(&self, node: usize) -> bool {
        node < self.nodes.len()
    }

    fn focus(&mut self, node: usize) {
        println!("  focus -> {}", self.nodes[node].name);
        self.focused = Some(node);
    }
}

impl SurfaceHost for Page {
    fn surface_root(&self) -> usize {
        self.surface
    }

    fn anchor_bounds(&self) -> Option<Rect> {
        Some(Rect::new(560.0, 8.0, 600.0, 40.0))
    }

    fn surface_size(&self) -> Size {
        Size::new(180.0, 120.0)
    }

    fn window_size(&self) -> Size {
        Size::new(640.0, 480.0)
    }

    fn body_size(&self) -> Size {
        Size::new(640.0, 1200.0)
    }

    fn window_scroll(&self) -> Vec2 {
        Vec2::new(0.0, 24.0)
    }

    fn is_rtl(&self) -> bool {
        false
    }

    fn hoist_to_body(&mut self) {
        self.nodes[self.surface].parent = Some(0);
        self.hoisted = true;
    }

    fn apply_placement(&mut self, placement: &Placement) {
        println!(
            "  placed at {:?}: {:?}, transform-origin: {}",
            placement.corner, placement.style, placement.transform_origin
        );
    }

    fn notify(&mut self, event: SurfaceEvent) {
        println!("  event: {event:?}");
    }
}

fn main() {
    let mut page = Page::build();
    let focusable: Vec<_> = collect_focusable(&page, page.surface)
        .into_iter()
        .map(|n| page.nodes[n].name)
        .collect();
    println!("focusable items: {focusable:?}");

    let mut menu = MenuSurface::new(SurfaceConfig {
        anchor_corner: Corner::BottomStart,
        anchor_margin: Margin::ZERO.with_bottom(4.0),
        ..SurfaceConfig::default()
    });

    println!("open (inside the toolbar):");
    if let Err(err) = menu.open(&mut page) {
        println!("  failed: {err}");
        return;
    }

    let last = menu.focus_ring().last();
    println!("tab from {}:", page.name(last));
    if let Some(last) = last {
        page.focus(last);
    }
    let outcome = menu.handle_keydown(
        KeyInput {
            key: Key::from_dom("Tab", 9),
            shift: false,
        },
        &mut page,
    );
    println!("  prevent default: {}", outcome.prevent_default);

    println!("escape:");
    let outcome = menu.handle_keydown(
        KeyInput {
            key: Key::from_dom("Escape", 27),
            shift: false,
        },
        &mut page,
    );
    println!("  prevent default: {}", outcome.prevent_default);

    println!("close:");
    menu.close(&mut page);
    println!("  focused: {}", page.name(page.focused));

    println!("hoist and reopen:");
    menu.hoist_to_body(&mut page);
    if let Err(err) = menu.open(&mut page) {
        println!("  failed: {err}");
        return;
    }
    println!("  hoisted: {}", page.hoisted);
    println!("click outside:");
    let requested = menu.handle_body_click(0, &mut page);
    println!("  close requested: {requested}");
    menu.close(&mut page);
}
