//! Host ports: the capabilities a host environment provides to the navigator.
//!
//! The core never walks a real DOM. A host implements [`ElementView`] for its
//! element handles, [`Container`] for the navigable parent, and [`Document`]
//! for the page-level input source and viewport. Handles are expected to be
//! cheap clones that compare by identity; mutation goes through the handle
//! (the host tree is shared), so marker methods take `&self`.

use std::cell::RefCell;
use std::rc::Rc;

use domnav_types::{Bounds, ClientRect, Point, ScrollOffset, Size};

/// Opaque identifier of a registered keydown listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A navigable element.
pub trait ElementView: Clone + PartialEq {
    /// Offset box relative to the offset parent.
    fn bounds(&self) -> Bounds;

    /// Box relative to the visible page viewport.
    fn client_rect(&self) -> ClientRect;

    /// Nearest positioned ancestor, if any.
    fn offset_parent(&self) -> Option<Self>;

    fn previous_sibling(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn add_marker(&self, name: &str);

    fn remove_marker(&self, name: &str);

    fn has_marker(&self, name: &str) -> bool;
}

/// The scrollable parent whose direct children are navigated.
pub trait Container {
    type Element: ElementView;

    /// Direct children in document order.
    fn children(&self) -> Vec<Self::Element>;

    /// Offset box of the container itself.
    fn bounds(&self) -> Bounds;

    fn scroll_offset(&self) -> ScrollOffset;

    fn set_scroll_left(&mut self, left: i32);

    fn set_scroll_top(&mut self, top: i32);

    /// Called by the adapter layer when it attaches a navigator.
    fn attach_back_reference(&mut self) {}

    /// Called on destroy to drop whatever the adapter attached.
    fn clear_back_reference(&mut self) {}
}

/// Page-level services: container lookup, the keydown subscription point,
/// and the outer viewport.
pub trait Document {
    type Container: Container;

    /// Resolve a selector to a single container.
    fn query_selector(&self, selector: &str) -> Option<Self::Container>;

    fn add_keydown_listener(&mut self) -> ListenerId;

    fn remove_keydown_listener(&mut self, id: ListenerId);

    /// Visible window size (`innerWidth` x `innerHeight`).
    fn inner_size(&self) -> Size;

    /// Document client size used for page scroll alignment.
    fn client_size(&self) -> Size {
        self.inner_size()
    }

    /// Offset of the body element.
    fn body_offset(&self) -> Point {
        Point::ORIGIN
    }

    fn set_page_scroll_left(&mut self, left: i32);

    fn set_page_scroll_top(&mut self, top: i32);
}

/// Element type reachable from a document.
pub type ElementOf<D> = <<D as Document>::Container as Container>::Element;

/// Several navigators can share one document through `Rc<RefCell<_>>`.
impl<D: Document> Document for Rc<RefCell<D>> {
    type Container = D::Container;

    fn query_selector(&self, selector: &str) -> Option<Self::Container> {
        self.borrow().query_selector(selector)
    }

    fn add_keydown_listener(&mut self) -> ListenerId {
        self.borrow_mut().add_keydown_listener()
    }

    fn remove_keydown_listener(&mut self, id: ListenerId) {
        self.borrow_mut().remove_keydown_listener(id)
    }

    fn inner_size(&self) -> Size {
        self.borrow().inner_size()
    }

    fn client_size(&self) -> Size {
        self.borrow().client_size()
    }

    fn body_offset(&self) -> Point {
        self.borrow().body_offset()
    }

    fn set_page_scroll_left(&mut self, left: i32) {
        self.borrow_mut().set_page_scroll_left(left)
    }

    fn set_page_scroll_top(&mut self, top: i32) {
        self.borrow_mut().set_page_scroll_top(top)
    }
}
