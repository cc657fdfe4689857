//! The navigator: selection state, directional moves and scroll coordination.
//!
//! A [`Navigator`] is bound to one container. Each directional move picks a
//! candidate according to the configured [`Mode`], scrolls it into view and
//! moves the marker onto it. Moves that find no candidate leave the state
//! untouched.

use domnav_types::{Direction, KeyEvent, Mode, NavError, NavigatorConfig, Options, Result};

use crate::grid;
use crate::host::{Container, Document, ElementOf, ElementView, ListenerId};
use crate::scroll::{self, ScrollAdjust};
use crate::spatial;

/// Keyboard navigator over the children of one container.
pub struct Navigator<D: Document> {
    document: D,
    container: D::Container,
    config: NavigatorConfig,
    options: Options,
    /// Effective grid column count (configured or detected).
    columns: u32,
    selected: Option<ElementOf<D>>,
    listener: Option<ListenerId>,
}

impl<D: Document> Navigator<D> {
    /// Create a navigator for `container` and start listening for keys.
    ///
    /// Fails with [`NavError::InvalidConfiguration`] if the config does not
    /// validate; nothing is registered in that case.
    pub fn new(document: D, container: D::Container, config: NavigatorConfig) -> Result<Self> {
        let options = config.validate()?;
        let mut nav = Self {
            document,
            container,
            config,
            options,
            columns: 0,
            selected: None,
            listener: None,
        };
        nav.init()?;
        Ok(nav)
    }

    /// Like [`Navigator::new`], resolving the container through the document.
    pub fn from_selector(document: D, selector: &str, config: NavigatorConfig) -> Result<Self> {
        let container = document
            .query_selector(selector)
            .ok_or_else(|| NavError::ContainerNotFound(selector.to_string()))?;
        Self::new(document, container, config)
    }

    /// (Re-)initialize: validate the config, forget the selection, rebuild
    /// key bindings, derive grid columns and enable the key listener.
    ///
    /// A detected column count is written back into the config, so later
    /// calls keep it instead of detecting again.
    pub fn init(&mut self) -> Result<()> {
        self.options = self.config.validate()?;
        if let Some(prev) = self.selected.take() {
            prev.remove_marker(&self.options.marker);
        }

        self.columns = self.options.columns;
        if self.options.mode == Mode::Grid && self.columns == 0 {
            self.columns = grid::detect_columns(self.elements().iter().map(|el| el.bounds().top));
            self.config.cols = self.columns;
            log::debug!("Detected {} grid columns", self.columns);
        }

        self.disable();
        self.enable();
        log::info!(
            "Navigator initialized (mode={}, marker={})",
            self.options.mode,
            self.options.marker
        );
        Ok(())
    }

    /// Register the key listener. No-op if already enabled.
    pub fn enable(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(self.document.add_keydown_listener());
        }
    }

    /// Unregister the key listener. No-op if already disabled.
    pub fn disable(&mut self) {
        if let Some(id) = self.listener.take() {
            self.document.remove_keydown_listener(id);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop listening and drop the adapter's back-reference on the
    /// container. Markers are left as they are.
    pub fn destroy(&mut self) {
        self.disable();
        self.container.clear_back_reference();
        log::info!("Navigator destroyed");
    }

    pub fn left(&mut self) {
        self.navigate(Direction::Left);
    }

    pub fn up(&mut self) {
        self.navigate(Direction::Up);
    }

    pub fn right(&mut self) {
        self.navigate(Direction::Right);
    }

    pub fn down(&mut self) {
        self.navigate(Direction::Down);
    }

    /// Move the selection one step towards `direction`, if possible.
    pub fn navigate(&mut self, direction: Direction) {
        match self.candidate(direction) {
            Some(next) => self.select(next, Some(direction)),
            None => log::trace!("No candidate {direction}; selection unchanged"),
        }
    }

    /// Handle a key press from the document. Returns `true` when the key was
    /// consumed (the host should suppress its default action).
    pub fn handle_keydown(&mut self, event: &KeyEvent) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(direction) = self.options.bindings.direction(event.which) else {
            return false;
        };
        self.navigate(direction);
        true
    }

    pub fn selected(&self) -> Option<&ElementOf<D>> {
        self.selected.as_ref()
    }

    /// Make `element` the selection: unmark the previous one, scroll along
    /// `direction` (no scrolling when `None`), mark the new one.
    ///
    /// No-op if `element` is already selected or is not a child of the
    /// container.
    pub fn select(&mut self, element: ElementOf<D>, direction: Option<Direction>) {
        if self.selected.as_ref() == Some(&element) {
            return;
        }
        if !self.elements().contains(&element) {
            log::warn!("Ignoring selection of an element outside the container");
            return;
        }

        if let Some(prev) = self.selected.take() {
            prev.remove_marker(&self.options.marker);
        }
        if let Some(direction) = direction {
            self.scroll_to(&element, direction);
        }
        element.add_marker(&self.options.marker);
        log::debug!("Selected element at {:?}", element.bounds());
        self.selected = Some(element);
    }

    /// Scroll the container, or failing that the page, just enough to show
    /// `element` at the edge `direction` heads towards.
    pub fn scroll_to(&mut self, element: &ElementOf<D>, direction: Direction) {
        let bounds = element.bounds();
        if !self.in_container_viewport(element) {
            let adjust = scroll::container_scroll(direction, bounds, self.container.bounds());
            log::debug!("Scrolling container: {adjust:?}");
            match adjust {
                ScrollAdjust::Left(v) => self.container.set_scroll_left(v),
                ScrollAdjust::Top(v) => self.container.set_scroll_top(v),
            }
        } else if !self.in_page_viewport(element) {
            let adjust = scroll::page_scroll(
                direction,
                scroll::absolute_offset(element),
                bounds.size(),
                self.document.body_offset(),
                self.document.client_size(),
            );
            log::debug!("Scrolling page: {adjust:?}");
            match adjust {
                ScrollAdjust::Left(v) => self.document.set_page_scroll_left(v),
                ScrollAdjust::Top(v) => self.document.set_page_scroll_top(v),
            }
        }
    }

    /// Whether `element` is fully visible inside the scrolled container.
    pub fn in_container_viewport(&self, element: &ElementOf<D>) -> bool {
        scroll::in_container_viewport(
            element.bounds(),
            self.container.bounds(),
            self.container.scroll_offset(),
        )
    }

    /// Whether `element` is fully visible inside the window.
    pub fn in_page_viewport(&self, element: &ElementOf<D>) -> bool {
        scroll::in_page_viewport(element.client_rect(), self.document.inner_size())
    }

    /// Navigable elements in document order.
    pub fn elements(&self) -> Vec<ElementOf<D>> {
        self.container.children()
    }

    /// Elements at or before `(left, top)` on both axes.
    pub fn elements_before(&self, left: i32, top: i32) -> Vec<ElementOf<D>> {
        spatial::elements_before(self.elements(), left, top)
    }

    /// Elements at or after `(left, top)` on both axes.
    pub fn elements_after(&self, left: i32, top: i32) -> Vec<ElementOf<D>> {
        spatial::elements_after(self.elements(), left, top)
    }

    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    /// Effective grid column count; 0 outside grid mode unless configured.
    pub fn column_count(&self) -> u32 {
        self.columns
    }

    pub fn marker(&self) -> &str {
        &self.options.marker
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn container(&self) -> &D::Container {
        &self.container
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    fn candidate(&self, direction: Direction) -> Option<ElementOf<D>> {
        let mode = self.options.mode;
        let axis_open = match mode {
            Mode::Horizontal => direction.is_horizontal(),
            Mode::Vertical => !direction.is_horizontal(),
            Mode::Auto | Mode::Grid => true,
        };
        if !axis_open {
            return None;
        }

        let elements = self.elements();
        let Some((index, current)) = self.current(&elements) else {
            return elements.into_iter().next();
        };

        match mode {
            Mode::Auto => spatial::neighbor(direction, elements, &current),
            Mode::Horizontal | Mode::Vertical => {
                if direction.is_backward() {
                    current.previous_sibling()
                } else {
                    current.next_sibling()
                }
            },
            Mode::Grid => self.grid_candidate(direction, index, &current),
        }
    }

    fn grid_candidate(
        &self,
        direction: Direction,
        index: usize,
        current: &ElementOf<D>,
    ) -> Option<ElementOf<D>> {
        match direction {
            Direction::Left if grid::can_move_left(index, self.columns) => {
                current.previous_sibling()
            },
            Direction::Right if grid::can_move_right(index, self.columns) => {
                current.next_sibling()
            },
            Direction::Left | Direction::Right => None,
            // Zero columns means a zero-step walk: the selection stays put.
            Direction::Up | Direction::Down if self.columns == 0 => None,
            Direction::Up => grid::walk(current, self.columns, true),
            Direction::Down => grid::walk(current, self.columns, false),
        }
    }

    /// The selection and its index, if it is still a child of the container.
    fn current(&self, elements: &[ElementOf<D>]) -> Option<(usize, ElementOf<D>)> {
        let selected = self.selected.as_ref()?;
        match elements.iter().position(|el| el == selected) {
            Some(index) => Some((index, selected.clone())),
            None => {
                log::warn!("Selected element left the container; restarting from the first child");
                None
            },
        }
    }
}
