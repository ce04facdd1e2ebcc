//! Application runtime: the serialized event loop.
//!
//! One FIFO channel carries everything the loop reacts to: application
//! messages, cursor commands, raw terminal events, clock ticks, and the
//! input thread's shutdown handshake. The loop is the single consumer;
//! handling of one item (update, command interpretation, re-render)
//! completes before the next item is dequeued, so two `update` calls never
//! interleave.

use crate::layout::{compute, Size};
use crate::runtime::command::{Cmd, CursorCommand, QuitResult};
use crate::runtime::debug::Inspector;
use crate::runtime::input::InputDriver;
use crate::runtime::interpreter::{interpret, LoopItem};
use crate::runtime::subscription::{self, Sub};
use crate::runtime::ticker::ClockDriver;
use crate::terminal::{Backend, EventSource, TerminalEvent};
use crate::view::Node;
use crossbeam_channel::unbounded;
use std::io;
use std::time::Duration;

/// The application-supplied contract.
pub struct App<Model, Msg> {
    /// Produce the initial model and startup command.
    pub initialize: Box<dyn Fn() -> (Model, Cmd<Msg>)>,
    /// Build the widget tree for a model at a terminal size.
    pub render: Box<dyn Fn(&Model, Size) -> Node<Msg>>,
    /// React to a message, producing the next model and a command.
    pub update: Box<dyn Fn(Msg, &Model) -> (Model, Cmd<Msg>)>,
    /// Standing event subscriptions.
    pub subscriptions: Vec<Sub<Msg>>,
}

/// Runtime tuning knobs.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// How long the input thread waits on each poll before rechecking its
    /// shutdown flag.
    pub poll_timeout: Duration,
    /// Where to record the laid-out tree, model, and log for external
    /// debug tooling.
    pub inspector: Option<Inspector>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            inspector: None,
        }
    }
}

/// Run an application with the default configuration.
///
/// Blocks until the application quits and returns the recorded result.
///
/// # Errors
///
/// Returns an error if drawing to or restoring the backend fails.
pub fn application<Model, Msg, B, S>(
    app: App<Model, Msg>,
    backend: &mut B,
    events: S,
) -> io::Result<QuitResult>
where
    Model: PartialEq + std::fmt::Debug,
    Msg: Clone + Send + 'static,
    B: Backend,
    S: EventSource + Send + 'static,
{
    application_with(app, backend, events, RuntimeConfig::default())
}

/// Run an application with an explicit configuration.
///
/// # Errors
///
/// Returns an error if drawing to or restoring the backend fails.
pub fn application_with<Model, Msg, B, S>(
    app: App<Model, Msg>,
    backend: &mut B,
    events: S,
    config: RuntimeConfig,
) -> io::Result<QuitResult>
where
    Model: PartialEq + std::fmt::Debug,
    Msg: Clone + Send + 'static,
    B: Backend,
    S: EventSource + Send + 'static,
{
    let (tx, rx) = unbounded::<LoopItem<Msg>>();

    let (mut model, initial_command) = (app.initialize)();
    let size = backend.size();
    let mut view = compute((app.render)(&model, size), size.width, size.height);
    draw(&view, backend)?;
    record(&config.inspector, &view, &model);

    let input = InputDriver::spawn(events, tx.clone(), config.poll_timeout);
    let clocks: Vec<ClockDriver> = app
        .subscriptions
        .iter()
        .enumerate()
        .filter_map(|(index, sub)| match sub {
            Sub::Clock(interval, _) => Some(ClockDriver::spawn(index, *interval, tx.clone())),
            _ => None,
        })
        .collect();

    let mut quitting: Option<QuitResult> = None;
    if let Some(result) = interpret(initial_command, &tx) {
        quitting = Some(result);
        input.shutdown();
    }

    while let Ok(item) = rx.recv() {
        match item {
            LoopItem::Message(msg) => {
                if quitting.is_some() {
                    continue;
                }
                let (next, command) = (app.update)(msg, &model);
                let changed = next != model;
                model = next;
                if let Some(result) = interpret(command, &tx) {
                    quitting = Some(result);
                    input.shutdown();
                    continue;
                }
                if changed {
                    let size = backend.size();
                    view = compute((app.render)(&model, size), size.width, size.height);
                    draw(&view, backend)?;
                    record(&config.inspector, &view, &model);
                }
            }

            LoopItem::Terminal(command) => {
                if quitting.is_some() {
                    continue;
                }
                let (next_view, cursor) = view.apply_cursor(&command);
                view = next_view;
                if let Some(cursor) = cursor {
                    draw(&view, backend)?;
                    let x = cursor_column(&command, backend.cursor_position().0);
                    backend.move_cursor(x, cursor.y);
                    record(&config.inspector, &view, &model);
                    if let Some(map) = subscription::cursor(&app.subscriptions) {
                        let _ = tx.send(LoopItem::Message(map(cursor)));
                    }
                }
            }

            LoopItem::Raw(TerminalEvent::Key(key)) => {
                if quitting.is_some() {
                    continue;
                }
                // The focused node's event table swallows matching keys;
                // everything else falls through to the subscription, or is
                // dropped.
                let swallowed = view.view_focused().and_then(|node| node.event_message(&key));
                if let Some(msg) = swallowed {
                    let _ = tx.send(LoopItem::Message(msg));
                } else if let Some(map) = subscription::keyboard(&app.subscriptions) {
                    let _ = tx.send(LoopItem::Message(map(key)));
                }
            }

            LoopItem::Raw(TerminalEvent::Resize(size)) => {
                if quitting.is_some() {
                    continue;
                }
                backend.resize(size);
                view = compute((app.render)(&model, size), size.width, size.height);
                draw(&view, backend)?;
                record(&config.inspector, &view, &model);
                if let Some(map) = subscription::terminal_size(&app.subscriptions) {
                    let _ = tx.send(LoopItem::Message(map(size)));
                }
            }

            LoopItem::Tick(index, at) => {
                if quitting.is_some() {
                    continue;
                }
                if let Some(Sub::Clock(_, map)) = app.subscriptions.get(index) {
                    let _ = tx.send(LoopItem::Message(map(at)));
                }
            }

            LoopItem::InputError(err) => {
                if let Some(inspector) = &config.inspector {
                    inspector.log(format!("input error: {err}"));
                }
            }

            LoopItem::Interrupt => {
                if quitting.is_none() {
                    quitting = Some(QuitResult::Success(None));
                    input.shutdown();
                }
            }

            LoopItem::PollStopped => break,
        }
    }

    for clock in clocks {
        clock.join();
    }
    input.join();
    backend.restore()?;

    Ok(quitting.unwrap_or(QuitResult::Success(None)))
}

fn draw<Msg, B: Backend>(view: &Node<Msg>, backend: &mut B) -> io::Result<()> {
    view.render_to(backend);
    backend.present()?;
    backend.clear_buffer();
    Ok(())
}

fn record<Model: std::fmt::Debug, Msg>(
    inspector: &Option<Inspector>,
    view: &Node<Msg>,
    model: &Model,
) {
    if let Some(inspector) = inspector {
        inspector.record(view.outline(), format!("{model:?}"));
    }
}

// The cursor model tracks rows only; the column comes from the command.
fn cursor_column(command: &CursorCommand, current: u16) -> u16 {
    match command {
        CursorCommand::MoveCursor(dx, _) => {
            let shifted = i32::from(current) + dx;
            u16::try_from(shifted).unwrap_or(if *dx < 0 { 0 } else { u16::MAX })
        }
        CursorCommand::PutCursor(x, _) => *x,
        CursorCommand::Scroll(_) => current,
    }
}
