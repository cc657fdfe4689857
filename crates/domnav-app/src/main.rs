//! domnav demo driver.
//!
//! Builds a scrollable grid in an in-memory document, attaches a navigator
//! configured from a TOML file (first argument or `DOMNAV_CONFIG`), and
//! replays key presses read from stdin, one per line: `left`, `up`, `right`,
//! `down`, a raw key code, `show`, or `quit`.

mod input;
mod layout;

use std::io::{self, BufRead};

use anyhow::{Context, Result};

use domnav_core::{Container, Document, MemoryDom, MemoryElement, Navigator, NavigatorConfig};
use input::{ScriptCommand, parse_line};
use layout::DemoLayout;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DOMNAV_CONFIG").ok())
    {
        Some(path) => NavigatorConfig::from_file(&path)
            .with_context(|| format!("loading navigator config from {path}"))?,
        None => NavigatorConfig::default(),
    };

    let layout = DemoLayout::default();
    let (dom, _list, cells) = layout.build();
    log::info!(
        "Demo grid: {}x{} cells in a {}x{} container",
        layout.cols,
        layout.rows,
        layout.container.width,
        layout.container.height,
    );

    let mut nav = Navigator::from_selector(dom.clone(), "#grid", config.clone())
        .context("creating navigator")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading key script")?;
        match parse_line(&line, &config) {
            Some(ScriptCommand::Key(event)) => {
                if !nav.handle_keydown(&event) {
                    log::warn!("Key {} is not bound", event.which);
                }
                report(&nav, &dom, &cells);
            },
            Some(ScriptCommand::Show) => report(&nav, &dom, &cells),
            Some(ScriptCommand::Skip) => {},
            Some(ScriptCommand::Quit) => break,
            None => log::warn!("Unrecognized input: {}", line.trim()),
        }
    }

    nav.destroy();
    Ok(())
}

fn report(nav: &Navigator<MemoryDom>, dom: &MemoryDom, cells: &[MemoryElement]) {
    let index = nav
        .selected()
        .and_then(|sel| cells.iter().position(|c| c == sel));
    let scroll = nav.container().scroll_offset();
    let page = dom.page_scroll();
    match index {
        Some(i) => println!(
            "selected={i} container_scroll=({}, {}) page_scroll=({}, {}) window={:?}",
            scroll.left,
            scroll.top,
            page.left,
            page.top,
            nav.document().inner_size(),
        ),
        None => println!("selected=none"),
    }
}
