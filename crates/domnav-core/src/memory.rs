//! In-memory DOM-like host.
//!
//! [`MemoryDom`] implements the host ports over a small arena tree: nodes
//! with offset boxes, a positioned flag that decides offset parents, scroll
//! offsets, marker sets, and a keydown listener table. It backs the test
//! suites and the demo binary.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use domnav_types::{Bounds, ClientRect, Point, ScrollOffset, Size};

use crate::host::{Container, Document, ElementView, ListenerId};

#[derive(Debug, Default)]
struct Node {
    bounds: Bounds,
    parent: Option<usize>,
    children: Vec<usize>,
    positioned: bool,
    scroll: ScrollOffset,
    markers: BTreeSet<String>,
    back_reference: bool,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
    ids: HashMap<String, usize>,
    listeners: Vec<ListenerId>,
    next_listener: u64,
    inner_size: Size,
    client_size: Size,
    body_offset: Point,
    page_scroll: ScrollOffset,
}

impl Tree {
    fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    fn node_mut(&mut self, id: usize) -> &mut Node {
        &mut self.nodes[id]
    }

    fn offset_parent(&self, id: usize) -> Option<usize> {
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            if self.node(p).positioned {
                return Some(p);
            }
            current = self.node(p).parent;
        }
        None
    }

    fn sibling(&self, id: usize, step: isize) -> Option<usize> {
        let parent = self.node(id).parent?;
        let siblings = &self.node(parent).children;
        let index = siblings.iter().position(|&c| c == id)?;
        let target = index.checked_add_signed(step)?;
        siblings.get(target).copied()
    }

    fn absolute_origin(&self, id: usize) -> Point {
        let mut origin = self.node(id).bounds.origin();
        let mut current = self.offset_parent(id);
        while let Some(p) = current {
            let b = self.node(p).bounds;
            origin.left = origin.left.saturating_add(b.left);
            origin.top = origin.top.saturating_add(b.top);
            current = self.offset_parent(p);
        }
        origin
    }

    fn ancestor_scroll(&self, id: usize) -> ScrollOffset {
        let mut total = ScrollOffset::default();
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            let s = self.node(p).scroll;
            total.left = total.left.saturating_add(s.left);
            total.top = total.top.saturating_add(s.top);
            current = self.node(p).parent;
        }
        total
    }
}

/// Shared handle to an in-memory document.
#[derive(Clone)]
pub struct MemoryDom {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDom {
    /// Create an empty document whose window is `viewport` pixels.
    pub fn new(viewport: Size) -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: Vec::new(),
                ids: HashMap::new(),
                listeners: Vec::new(),
                next_listener: 1,
                inner_size: viewport,
                client_size: viewport,
                body_offset: Point::ORIGIN,
                page_scroll: ScrollOffset::default(),
            })),
        }
    }

    /// Append a new element to `parent` (or leave it at the root).
    ///
    /// `bounds` is relative to the element's offset parent: the nearest
    /// positioned ancestor, or the page when there is none.
    pub fn create_element(&self, parent: Option<&MemoryElement>, bounds: Bounds) -> MemoryElement {
        let mut tree = self.tree.borrow_mut();
        let id = tree.nodes.len();
        tree.nodes.push(Node {
            bounds,
            parent: parent.map(|p| p.id),
            ..Node::default()
        });
        if let Some(p) = parent {
            tree.node_mut(p.id).children.push(id);
        }
        MemoryElement {
            tree: Rc::clone(&self.tree),
            id,
        }
    }

    /// Register `el` under `#name` for [`Document::query_selector`].
    pub fn set_id(&self, el: &MemoryElement, name: &str) {
        self.tree.borrow_mut().ids.insert(name.to_string(), el.id);
    }

    /// Detach `el` from its parent. The handle stays valid but is no longer
    /// a child of anything.
    pub fn remove_element(&self, el: &MemoryElement) {
        let mut tree = self.tree.borrow_mut();
        if let Some(parent) = tree.node_mut(el.id).parent.take() {
            tree.node_mut(parent).children.retain(|&c| c != el.id);
        }
    }

    pub fn set_client_size(&self, size: Size) {
        self.tree.borrow_mut().client_size = size;
    }

    pub fn set_body_offset(&self, offset: Point) {
        self.tree.borrow_mut().body_offset = offset;
    }

    pub fn page_scroll(&self) -> ScrollOffset {
        self.tree.borrow().page_scroll
    }

    /// Registered keydown listeners in registration order.
    pub fn listeners(&self) -> Vec<ListenerId> {
        self.tree.borrow().listeners.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.tree.borrow().listeners.len()
    }

    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.tree.borrow().listeners.contains(&id)
    }
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nodes, listeners) = {
            let tree = self.tree.borrow();
            (tree.nodes.len(), tree.listeners.len())
        };
        f.debug_struct("MemoryDom")
            .field("nodes", &nodes)
            .field("listeners", &listeners)
            .finish()
    }
}

impl Document for MemoryDom {
    type Container = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        let name = selector.strip_prefix('#')?;
        let id = *self.tree.borrow().ids.get(name)?;
        Some(MemoryElement {
            tree: Rc::clone(&self.tree),
            id,
        })
    }

    fn add_keydown_listener(&mut self) -> ListenerId {
        let mut tree = self.tree.borrow_mut();
        let id = ListenerId(tree.next_listener);
        tree.next_listener += 1;
        tree.listeners.push(id);
        id
    }

    fn remove_keydown_listener(&mut self, id: ListenerId) {
        self.tree.borrow_mut().listeners.retain(|&l| l != id);
    }

    fn inner_size(&self) -> Size {
        self.tree.borrow().inner_size
    }

    fn client_size(&self) -> Size {
        self.tree.borrow().client_size
    }

    fn body_offset(&self) -> Point {
        self.tree.borrow().body_offset
    }

    fn set_page_scroll_left(&mut self, left: i32) {
        self.tree.borrow_mut().page_scroll.left = left;
    }

    fn set_page_scroll_top(&mut self, top: i32) {
        self.tree.borrow_mut().page_scroll.top = top;
    }
}

/// Handle to a node of a [`MemoryDom`]. Equality is node identity.
#[derive(Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    id: usize,
}

impl MemoryElement {
    /// Arena index, stable for the life of the document.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn set_bounds(&self, bounds: Bounds) {
        self.tree.borrow_mut().node_mut(self.id).bounds = bounds;
    }

    /// Make this element an offset parent for its descendants.
    pub fn set_positioned(&self, positioned: bool) {
        self.tree.borrow_mut().node_mut(self.id).positioned = positioned;
    }

    pub fn parent(&self) -> Option<MemoryElement> {
        let parent = self.tree.borrow().node(self.id).parent?;
        Some(self.handle(parent))
    }

    pub fn markers(&self) -> Vec<String> {
        self.tree.borrow().node(self.id).markers.iter().cloned().collect()
    }

    pub fn has_back_reference(&self) -> bool {
        self.tree.borrow().node(self.id).back_reference
    }

    fn handle(&self, id: usize) -> MemoryElement {
        MemoryElement {
            tree: Rc::clone(&self.tree),
            id,
        }
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.tree, &other.tree)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("id", &self.id)
            .field("bounds", &self.tree.borrow().node(self.id).bounds)
            .finish()
    }
}

impl ElementView for MemoryElement {
    fn bounds(&self) -> Bounds {
        self.tree.borrow().node(self.id).bounds
    }

    fn client_rect(&self) -> ClientRect {
        let tree = self.tree.borrow();
        let mut origin = tree.absolute_origin(self.id);
        let scroll = tree.ancestor_scroll(self.id);
        origin.left = origin
            .left
            .saturating_sub(scroll.left.saturating_add(tree.page_scroll.left));
        origin.top = origin
            .top
            .saturating_sub(scroll.top.saturating_add(tree.page_scroll.top));
        ClientRect::from_origin(origin, tree.node(self.id).bounds.size())
    }

    fn offset_parent(&self) -> Option<Self> {
        let parent = self.tree.borrow().offset_parent(self.id)?;
        Some(self.handle(parent))
    }

    fn previous_sibling(&self) -> Option<Self> {
        let id = self.tree.borrow().sibling(self.id, -1)?;
        Some(self.handle(id))
    }

    fn next_sibling(&self) -> Option<Self> {
        let id = self.tree.borrow().sibling(self.id, 1)?;
        Some(self.handle(id))
    }

    fn add_marker(&self, name: &str) {
        self.tree
            .borrow_mut()
            .node_mut(self.id)
            .markers
            .insert(name.to_string());
    }

    fn remove_marker(&self, name: &str) {
        self.tree.borrow_mut().node_mut(self.id).markers.remove(name);
    }

    fn has_marker(&self, name: &str) -> bool {
        self.tree.borrow().node(self.id).markers.contains(name)
    }
}

impl Container for MemoryElement {
    type Element = MemoryElement;

    fn children(&self) -> Vec<MemoryElement> {
        let ids = self.tree.borrow().node(self.id).children.clone();
        ids.into_iter().map(|c| self.handle(c)).collect()
    }

    fn bounds(&self) -> Bounds {
        ElementView::bounds(self)
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.tree.borrow().node(self.id).scroll
    }

    fn set_scroll_left(&mut self, left: i32) {
        self.tree.borrow_mut().node_mut(self.id).scroll.left = left;
    }

    fn set_scroll_top(&mut self, top: i32) {
        self.tree.borrow_mut().node_mut(self.id).scroll.top = top;
    }

    fn attach_back_reference(&mut self) {
        self.tree.borrow_mut().node_mut(self.id).back_reference = true;
    }

    fn clear_back_reference(&mut self) {
        self.tree.borrow_mut().node_mut(self.id).back_reference = false;
    }
}
