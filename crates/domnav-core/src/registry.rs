//! Plugin-style adapter: one navigator per container, methods by name.
//!
//! Hosts that expose navigation through a string-dispatched API (the way a
//! jQuery plugin does) attach a navigator to a container on first use and
//! then call methods by name. Options arrive as a JSON object.

use std::fmt;
use std::str::FromStr;

use domnav_types::{NavError, NavigatorConfig, Result};

use crate::host::{Container, Document, ElementOf};
use crate::navigator::Navigator;

/// Argument-free navigator methods reachable by name.
///
/// Calls that take arguments (`select`, `elements_before`, `elements_after`,
/// `in_container_viewport`, `in_page_viewport`, `scroll_to`) are not
/// dispatched by name; reach the navigator through
/// [`NavigatorRegistry::get_mut`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Init,
    Enable,
    Disable,
    Destroy,
    Left,
    Up,
    Right,
    Down,
    Selected,
    Elements,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Destroy => "destroy",
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Selected => "selected",
            Self::Elements => "elements",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "init" => Self::Init,
            "enable" => Self::Enable,
            "disable" => Self::Disable,
            "destroy" => Self::Destroy,
            "left" => Self::Left,
            "up" => Self::Up,
            "right" => Self::Right,
            "down" => Self::Down,
            "selected" => Self::Selected,
            "elements" => Self::Elements,
            other => return Err(NavError::UnknownMethod(other.to_string())),
        })
    }
}

/// Result of a dispatched method.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<E> {
    /// The method has no return value.
    Done,
    Selected(Option<E>),
    Elements(Vec<E>),
}

/// Navigators keyed by container.
pub struct NavigatorRegistry<D>
where
    D: Document + Clone,
    D::Container: Clone + PartialEq,
{
    document: D,
    entries: Vec<Navigator<D>>,
}

impl<D> NavigatorRegistry<D>
where
    D: Document + Clone,
    D::Container: Clone + PartialEq,
{
    pub fn new(document: D) -> Self {
        Self {
            document,
            entries: Vec::new(),
        }
    }

    /// Return the navigator for `container`, creating it with `options` if
    /// none is attached yet. Options are ignored for an existing navigator.
    pub fn attach(
        &mut self,
        container: &D::Container,
        options: &serde_json::Value,
    ) -> Result<&mut Navigator<D>> {
        if let Some(pos) = self.position(container) {
            return Ok(&mut self.entries[pos]);
        }
        let config = NavigatorConfig::from_json_value(options)?;
        let mut handle = container.clone();
        let nav = Navigator::new(self.document.clone(), handle.clone(), config)?;
        handle.attach_back_reference();
        self.entries.push(nav);
        log::debug!("Attached navigator #{}", self.entries.len());
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    /// Dispatch `method` by name on the navigator attached to `container`.
    /// `destroy` also forgets the navigator.
    pub fn invoke(&mut self, container: &D::Container, method: &str) -> Result<Reply<ElementOf<D>>> {
        let method: Method = method.parse()?;
        let pos = self.position(container).ok_or(NavError::NotAttached)?;
        let nav = &mut self.entries[pos];
        let reply = match method {
            Method::Init => {
                nav.init()?;
                Reply::Done
            },
            Method::Enable => {
                nav.enable();
                Reply::Done
            },
            Method::Disable => {
                nav.disable();
                Reply::Done
            },
            Method::Destroy => {
                nav.destroy();
                self.entries.remove(pos);
                Reply::Done
            },
            Method::Left => {
                nav.left();
                Reply::Done
            },
            Method::Up => {
                nav.up();
                Reply::Done
            },
            Method::Right => {
                nav.right();
                Reply::Done
            },
            Method::Down => {
                nav.down();
                Reply::Done
            },
            Method::Selected => Reply::Selected(nav.selected().cloned()),
            Method::Elements => Reply::Elements(nav.elements()),
        };
        Ok(reply)
    }

    pub fn get(&self, container: &D::Container) -> Option<&Navigator<D>> {
        self.position(container).map(|pos| &self.entries[pos])
    }

    /// Navigator for argument-carrying calls such as `select`.
    pub fn get_mut(&mut self, container: &D::Container) -> Option<&mut Navigator<D>> {
        self.position(container).map(|pos| &mut self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Navigators in attach order, for routing a key event to each.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Navigator<D>> {
        self.entries.iter_mut()
    }

    fn position(&self, container: &D::Container) -> Option<usize> {
        self.entries.iter().position(|nav| nav.container() == container)
    }
}
