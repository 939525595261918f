//! src/app.rs
//!
//! Constraint form and motif generator.
//! Maintains a one-to-one relationship between the selector's option list and
//! the set of togglable constraint panels (homopolymer, hairpin, motif
//! GC-content, key GC-content), mirroring each toggle into the hidden flag
//! fields the surrounding host restores state from, and generates key/payload
//! motif sets conforming to the active constraints.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Constructs the shared form state and runs the UI main loop for the
//! terminal-based constraint form.
//!
//! ## Overview
//! The application:
//! - Renders the selector list and every currently-added constraint panel.
//! - Keeps the option list, panel visibility, and flag fields in sync.
//! - Delivers queued load signals so panels (re)initialize their contents.
//! - Generates keys, payloads, and assembled motifs on demand, rejecting
//!   candidates that violate the added constraints.
//!
//! # Building and Running
//!
//! 1. From the project root:
//!    ```text
//!    cargo build --release
//!    ```
//!
//! 2. Run the app directly:
//!    ```text
//!    cargo run --release
//!    ```
//!
//! ### Environment Notes
//! - Terminal UI uses the `ratatui` and `crossterm` crates.
//! - A fresh session starts with every visibility flag set to "False"; seed the
//!   `FlagStore` passed to `FormState::new(...)` to restore a prior session.
//!
//! # Keyboard Controls (Interactive)
//!
//! - **Tab** — Move the selector cursor. Position 0 is the placeholder entry.
//! - **Enter** — Add the constraint under the cursor. The placeholder adds
//!   nothing.
//! - **1..4** — Remove a shown panel (1=homopolymer, 2=hairpin, 3=motif
//!   GC-content, 4=key GC-content). Pressing the key of a hidden panel does
//!   nothing.
//! - **g** — Generate a motif set conforming to the added constraints; the
//!   results panel shows the keys, payloads, and motifs, or why generation
//!   failed.
//! - **q** — Quit and restore terminal state.
//!
//! # State Rules
//!
//! - A panel is visible iff its option is absent from the selector iff its
//!   visibility flag reads "True".
//! - Adding a panel writes its selected token and "True"; removing it clears
//!   the token, writes "False", and re-appends the option with its display
//!   label.
//! - Every toggle queues a load signal; the frame loop drains the queue and
//!   reinitializes the affected panel's parameter fields.
//! - The key GC-content panel carries no flag fields; toggling it only moves
//!   the option and the panel.
//! - Generation reads each visible panel's fields and applies only the checks
//!   whose panels are visible; hidden panels contribute fallback values.
//!
//! # Extending the Application
//!
//! - **Adding constraint types:**
//!   Add a `PanelKind` variant and a metadata row in `form/registry.rs`;
//!   `select`/`remove` are table-driven and need no changes. Wire the new
//!   check into `motif/constraints.rs` if generation should honor it.
//!
//! # Implementation Note
//!
//! `run()` owns only the frame loop and keyboard dispatch; toggle semantics
//! live in `form::FormState` and generation in `motif::MotifBuilder`, so both
//! stay testable without a terminal.

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};

use crate::form::state::shared;
use crate::form::{FlagStore, FormState, PLACEHOLDER, PanelKind, SharedForm};
use crate::motif::{ConstraintSet, Constraints, ElementSizes, MotifBuilder, MotifSet};
use crate::panels::{ConstraintPanel, HeaderPanel, HelpPanel, ResultsPanel, SelectorPanel};
use crate::ui::{Node, group, leaf, stack};

use ratatui::layout::{Constraint, Direction};

/// Build a motif set from the form's current panels and fields.
fn generate(form: &FormState) -> Result<MotifSet> {
    let constraints = Constraints::from_form(form, ElementSizes::default())?;
    let enabled = ConstraintSet::from_form(form);
    MotifBuilder::new(constraints, enabled)
        .build(&mut rand::rng())
        .ok_or_else(|| eyre!("no conforming motif set found within the attempt budget"))
}

pub fn run() -> color_eyre::Result<()> {
    // Host-supplied flags; a fresh session hides everything.
    let flags = FlagStore::from_pairs([
        ("homVisible", "False"),
        ("hairpinVisible", "False"),
        ("gcVisible", "False"),
    ]);
    let form: SharedForm = shared(FormState::new(flags));

    // UI setup
    let mut terminal = ratatui::init();
    let mut cursor = 0usize;
    let mut results: Option<MotifSet> = None;
    let mut status = "No motifs generated yet. Press G.".to_string();
    let frame_time = Duration::from_millis(100);
    let mut running = true;

    while running {
        let frame_start = std::time::Instant::now();

        // Deliver queued load signals before drawing.
        {
            let mut g = form.write().unwrap();
            for kind in g.take_loads() {
                g.reload(kind);
            }
        }

        let (visible, option_count) = {
            let g = form.read().unwrap();
            (g.visible_panels(), g.options.len())
        };
        // keep the cursor inside placeholder + current options
        cursor = cursor.min(option_count);

        // Right side: one region per shown panel above the results block;
        // collapsed panels get no area.
        let mut panel_children: Vec<Node> = Vec::new();
        for kind in &visible {
            panel_children.push(leaf(
                Box::new(ConstraintPanel::new(form.clone(), *kind)) as Box<dyn crate::ui::Panel>
            ));
        }
        let panel_area = if panel_children.is_empty() {
            Constraint::Length(0)
        } else {
            Constraint::Min(0)
        };
        let right = group(
            Direction::Vertical,
            vec![
                (panel_area, stack(Direction::Vertical, panel_children)),
                (
                    Constraint::Min(9),
                    leaf(Box::new(ResultsPanel::new(results.clone(), &status))
                        as Box<dyn crate::ui::Panel>),
                ),
            ],
        );

        // Left side: the selector plus the controls block.
        let left = group(
            Direction::Vertical,
            vec![
                (
                    Constraint::Min(0),
                    leaf(Box::new(SelectorPanel::new(form.clone(), cursor))
                        as Box<dyn crate::ui::Panel>),
                ),
                (
                    Constraint::Length(7),
                    leaf(Box::new(HelpPanel) as Box<dyn crate::ui::Panel>),
                ),
            ],
        );

        // Main interface layout
        let root = group(
            Direction::Vertical,
            vec![
                (
                    Constraint::Length(3),
                    leaf(
                        Box::new(HeaderPanel::new("Motif Generation Tool", form.clone()))
                            as Box<dyn crate::ui::Panel>,
                    ),
                ),
                (
                    Constraint::Min(3),
                    group(
                        Direction::Horizontal,
                        vec![
                            (Constraint::Percentage(40), left),
                            (Constraint::Percentage(60), right),
                        ],
                    ),
                ),
            ],
        );

        terminal.draw(|f| root.draw(f, f.area()))?;

        // Keyboard controls
        while crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') => running = false,
                    crossterm::event::KeyCode::Tab => {
                        cursor = (cursor + 1) % (option_count + 1);
                    }
                    crossterm::event::KeyCode::Enter => {
                        let mut g = form.write().unwrap();
                        let value = if cursor == 0 {
                            PLACEHOLDER
                        } else {
                            g.options
                                .get(cursor - 1)
                                .map(|o| o.value)
                                .unwrap_or(PLACEHOLDER)
                        };
                        if g.select(value) {
                            cursor = 0;
                        }
                    }
                    crossterm::event::KeyCode::Char(c @ '1'..='4') => {
                        let kind = PanelKind::ALL[c as usize - '1' as usize];
                        form.write().unwrap().remove(kind);
                    }
                    crossterm::event::KeyCode::Char('g') => {
                        let g = form.read().unwrap();
                        match generate(&g) {
                            Ok(set) => {
                                status = format!(
                                    "Generated {} motifs from {} keys and {} payloads.",
                                    set.motifs.len(),
                                    set.keys.len(),
                                    set.payloads.len()
                                );
                                results = Some(set);
                            }
                            Err(err) => {
                                status = format!("Generation failed: {err}");
                                results = None;
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    ratatui::restore();
    Ok(())
}
