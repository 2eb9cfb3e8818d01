//! Commands accepted at the prompt.
//!
//! A line is split on whitespace and parsed with clap, so every command
//! gets the usual `--help` output. Quoting is not supported; the only
//! argument that may contain spaces is the trailing font family of `body`.

use clap::{Args, Parser, Subcommand};
use layout_designer::{BodyStyle, Direction, DraftElement};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "layout-designer",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an element at a random spot on the canvas
    Add {
        name: String,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Change an element; unspecified fields keep their current values
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Select an element for nudging and duplication
    Select { id: u64 },

    /// Move the selected element like the arrow keys do
    Nudge {
        /// up, down, left or right
        direction: Direction,
        #[arg(default_value_t = 1)]
        steps: u32,
    },

    /// Place an element at an absolute position
    #[command(allow_negative_numbers = true)]
    Drag {
        id: u64,
        #[arg(value_parser = finite)]
        x: f64,
        #[arg(value_parser = finite)]
        y: f64,
    },

    /// Set an element's size, and optionally its position
    #[command(allow_negative_numbers = true)]
    Resize {
        id: u64,
        #[arg(value_parser = finite)]
        width: f64,
        #[arg(value_parser = finite)]
        height: f64,
        #[arg(value_parser = finite)]
        x: Option<f64>,
        #[arg(value_parser = finite)]
        y: Option<f64>,
    },

    /// Copy an element, or the selected one
    Duplicate { id: Option<u64> },

    /// Delete an element, or the selected one
    #[command(alias = "rm")]
    Delete { id: Option<u64> },

    /// Show every element in order
    #[command(alias = "ls")]
    List,

    /// Print the style an element is drawn with on the canvas
    Show { id: u64 },

    /// Set page-wide styling and include it in the export
    Body {
        #[arg(long)]
        background: Option<String>,
        #[arg(long, alias = "color")]
        colour: Option<String>,
        #[arg(long)]
        font_size: Option<String>,
        /// Font family, for example: Segoe UI, sans-serif
        #[arg(trailing_var_arg = true)]
        font_family: Vec<String>,
    },

    /// Print the style sheet, or write it to a file
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Remove every element and the saved layout
    Restart {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    #[command(alias = "exit")]
    Quit,
}

/// Styling options shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct StyleArgs {
    #[arg(long, value_parser = finite)]
    pub width: Option<f64>,

    #[arg(long, value_parser = finite)]
    pub height: Option<f64>,

    #[arg(long, alias = "color")]
    pub colour: Option<String>,

    #[arg(long, conflicts_with = "no_gradient")]
    pub gradient: bool,

    #[arg(long)]
    pub no_gradient: bool,

    #[arg(long, value_parser = finite, conflicts_with = "no_opacity")]
    pub opacity: Option<f64>,

    #[arg(long)]
    pub no_opacity: bool,

    #[arg(long, value_parser = finite, conflicts_with = "no_radius")]
    pub radius: Option<f64>,

    #[arg(long)]
    pub no_radius: bool,

    /// Show a border, 2px white unless overridden
    #[arg(long, conflicts_with = "no_border")]
    pub border: bool,

    #[arg(long, value_parser = finite, conflicts_with = "no_border")]
    pub border_width: Option<f64>,

    #[arg(long, alias = "border-color", conflicts_with = "no_border")]
    pub border_colour: Option<String>,

    #[arg(long)]
    pub no_border: bool,
}

impl StyleArgs {
    /// Overlays the given options on a draft.
    pub fn apply(&self, mut draft: DraftElement) -> DraftElement {
        if let Some(width) = self.width {
            draft.width = width;
        }
        if let Some(height) = self.height {
            draft.height = height;
        }
        if let Some(colour) = &self.colour {
            draft.colour = colour.as_str().into();
        }

        if self.gradient {
            draft.use_gradient = true;
        } else if self.no_gradient {
            draft.use_gradient = false;
        }

        if self.opacity.is_some() {
            draft.opacity = self.opacity;
        } else if self.no_opacity {
            draft.opacity = None;
        }

        if self.radius.is_some() {
            draft.border_radius = self.radius;
        } else if self.no_radius {
            draft.border_radius = None;
        }

        if self.border || self.border_width.is_some() || self.border_colour.is_some() {
            let mut border = draft.border.take().unwrap_or_default();
            if let Some(width) = self.border_width {
                border.width = width;
            }
            if let Some(colour) = &self.border_colour {
                border.colour = colour.as_str().into();
            }
            draft.border = Some(border);
        } else if self.no_border {
            draft.border = None;
        }

        draft
    }
}

/// Builds the body style that a `body` command asks for, starting from the
/// current one.
pub fn body_style(
    current: &BodyStyle,
    background: Option<&str>,
    colour: Option<&str>,
    font_size: Option<&str>,
    font_family: &[String],
) -> BodyStyle {
    let mut body = current.clone();

    if let Some(background) = background {
        body.background_colour = background.into();
    }
    if let Some(colour) = colour {
        body.font_colour = colour.into();
    }
    if let Some(font_size) = font_size {
        body.font_size = font_size.to_string();
    }
    if !font_family.is_empty() {
        body.font_family = font_family.join(" ");
    }

    body
}

/// Number argument parser that refuses `NaN` and infinities, which the saved
/// layout cannot hold.
pub fn finite(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("'{}' is not a finite number", value))
    }
}

/// Parses one line of input. Blank lines give `None`.
///
/// `help` and `--help` come back as a clap error whose text is the help
/// output.
pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }

    let parsed = CommandLine::try_parse_from(words)?;
    Ok(Some(parsed.command))
}
