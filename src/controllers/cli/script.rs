//! Line-oriented event scripts for headless replay.
//!
//! ```text
//! # drag right by 10px, then zoom out one tick
//! press left 100 100
//! move 90 110
//! release left 90 110
//! frame
//! scroll 1
//! set fractal julia
//! set julia -0.8 0.156
//! ```
//!
//! `frame` ends a frame; trailing commands without it form a final frame.

use std::{error::Error, fmt, str::FromStr, str::SplitWhitespace};

use crate::controllers::interactive::{InputEvent, Key, PointerButton, ViewSettings};
use crate::core::fractals::{ColourModes, FractalKinds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingCommand {
    FractalKind(FractalKinds),
    ColourMode(ColourModes),
    MaxIterations(i32),
    JuliaConstant(f32, f32),
}

impl SettingCommand {
    pub fn apply(self, settings: &mut dyn ViewSettings) {
        match self {
            Self::FractalKind(kind) => settings.set_fractal_kind(kind),
            Self::ColourMode(mode) => settings.set_colour_mode(mode),
            Self::MaxIterations(max_iterations) => settings.set_max_iterations(max_iterations),
            Self::JuliaConstant(real, imag) => settings.set_julia_constant(real, imag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    Input(InputEvent),
    Setting(SettingCommand),
    EndFrame,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptErrorKind {
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    InvalidNumber(String),
    UnknownButton(String),
    UnknownKey(String),
    UnknownFractal(String),
    UnknownColourMode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ScriptErrorKind::UnknownCommand(word) => write!(f, "unknown command `{word}`"),
            ScriptErrorKind::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            ScriptErrorKind::UnexpectedArgument(word) => write!(f, "unexpected argument `{word}`"),
            ScriptErrorKind::InvalidNumber(word) => write!(f, "`{word}` is not a valid number"),
            ScriptErrorKind::UnknownButton(word) => write!(f, "unknown button `{word}`"),
            ScriptErrorKind::UnknownKey(word) => write!(f, "unknown key `{word}`"),
            ScriptErrorKind::UnknownFractal(word) => write!(f, "unknown fractal `{word}`"),
            ScriptErrorKind::UnknownColourMode(word) => write!(f, "unknown colour mode `{word}`"),
        }
    }
}

impl Error for ScriptError {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventScript {
    commands: Vec<ScriptCommand>,
}

impl EventScript {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let content = raw_line.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let mut words = Words::new(content.split_whitespace());
            let command = parse_command(&mut words)
                .and_then(|command| words.finish().map(|()| command))
                .map_err(|kind| ScriptError {
                    line: index + 1,
                    kind,
                })?;
            commands.push(command);
        }

        Ok(Self { commands })
    }

    #[must_use]
    pub fn commands(&self) -> &[ScriptCommand] {
        &self.commands
    }

    /// Commands grouped per frame, without the `frame` markers.
    #[must_use]
    pub fn frames(&self) -> Vec<&[ScriptCommand]> {
        let mut frames: Vec<&[ScriptCommand]> = self
            .commands
            .split(|command| *command == ScriptCommand::EndFrame)
            .collect();

        if frames.last().is_some_and(|frame| frame.is_empty()) {
            frames.pop();
        }

        frames
    }
}

struct Words<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    fn new(inner: SplitWhitespace<'a>) -> Self {
        Self { inner }
    }

    fn next(&mut self, name: &'static str) -> Result<&'a str, ScriptErrorKind> {
        self.inner.next().ok_or(ScriptErrorKind::MissingArgument(name))
    }

    fn number<T: FromStr>(&mut self, name: &'static str) -> Result<T, ScriptErrorKind> {
        let word = self.next(name)?;
        word.parse()
            .map_err(|_| ScriptErrorKind::InvalidNumber(word.to_owned()))
    }

    fn finish(&mut self) -> Result<(), ScriptErrorKind> {
        match self.inner.next() {
            Some(word) => Err(ScriptErrorKind::UnexpectedArgument(word.to_owned())),
            None => Ok(()),
        }
    }
}

fn parse_command(words: &mut Words<'_>) -> Result<ScriptCommand, ScriptErrorKind> {
    let command = words.next("command")?;

    let event = match command {
        "frame" => return Ok(ScriptCommand::EndFrame),
        "set" => return parse_setting(words).map(ScriptCommand::Setting),
        "move" => InputEvent::PointerMoved {
            x: words.number("x")?,
            y: words.number("y")?,
        },
        "press" => InputEvent::ButtonPressed {
            button: parse_button(words.next("button")?)?,
            x: words.number("x")?,
            y: words.number("y")?,
        },
        "release" => InputEvent::ButtonReleased {
            button: parse_button(words.next("button")?)?,
            x: words.number("x")?,
            y: words.number("y")?,
        },
        "scroll" => InputEvent::Scrolled {
            delta: words.number("delta")?,
        },
        "resize" => InputEvent::Resized {
            width: words.number("width")?,
            height: words.number("height")?,
        },
        "key" => InputEvent::KeyReleased {
            key: parse_key(words.next("key")?)?,
        },
        "close" => InputEvent::CloseRequested,
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_owned())),
    };

    Ok(ScriptCommand::Input(event))
}

fn parse_setting(words: &mut Words<'_>) -> Result<SettingCommand, ScriptErrorKind> {
    let setting = match words.next("setting")? {
        "fractal" => {
            let name = words.next("fractal")?;
            let kind = FractalKinds::from_name(name)
                .ok_or_else(|| ScriptErrorKind::UnknownFractal(name.to_owned()))?;
            SettingCommand::FractalKind(kind)
        }
        "colour" | "color" => {
            let name = words.next("colour")?;
            let mode = ColourModes::from_name(name)
                .ok_or_else(|| ScriptErrorKind::UnknownColourMode(name.to_owned()))?;
            SettingCommand::ColourMode(mode)
        }
        "iterations" => SettingCommand::MaxIterations(words.number("iterations")?),
        "julia" => SettingCommand::JuliaConstant(words.number("real")?, words.number("imag")?),
        other => return Err(ScriptErrorKind::UnknownCommand(format!("set {other}"))),
    };

    Ok(setting)
}

fn parse_button(word: &str) -> Result<PointerButton, ScriptErrorKind> {
    match word {
        "left" => Ok(PointerButton::Left),
        "right" => Ok(PointerButton::Right),
        "middle" => Ok(PointerButton::Middle),
        other => Err(ScriptErrorKind::UnknownButton(other.to_owned())),
    }
}

fn parse_key(word: &str) -> Result<Key, ScriptErrorKind> {
    match word {
        "escape" | "esc" => Ok(Key::Escape),
        "home" => Ok(Key::Home),
        other => Err(ScriptErrorKind::UnknownKey(other.to_owned())),
    }
}
