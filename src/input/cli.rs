use crate::config::ConfigOptions;
use clap::Parser;

const CONTROLS_HELP: &str = "\
Controls (when not using -f), typed as a line and confirmed with Enter:
  w, s, a, d    Pan the viewport up, down, left and right
  q, e          Decrease or increase the iteration limit by 100
  r             Zoom in
  f             Zoom out
  x             Exit

Examples:
  fractal -j -0.55268 0.959456 -xmin -2.1 -xmax 0.7 -ymin -1.5 -ymax 1.5 -s 20 -m color
  fractal -c -p '#' -m red -cs 10";

/// Long flags that are also accepted with a single leading dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["-xmin", "-xmax", "-ymin", "-ymax", "-cs"];

/// Flags whose value is free text and must never be rewritten.
const TEXT_VALUE_FLAGS: &[&str] = &["-p", "--pixel", "-m", "--mode"];

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fractal")]
#[command(
    about = "Render Mandelbrot and Julia sets as coloured text in the terminal",
    long_about = None
)]
#[command(after_help = CONTROLS_HELP)]
pub struct Cli {
    /// Render the Julia set for the constant REAL + IMAGINARY·i
    #[arg(
        short = 'j',
        long = "julia",
        num_args = 2,
        value_names = ["REAL", "IMAGINARY"],
        allow_negative_numbers = true
    )]
    pub julia: Option<Vec<f64>>,

    /// Minimum real coordinate of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub xmin: Option<f64>,

    /// Maximum real coordinate of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub xmax: Option<f64>,

    /// Minimum imaginary coordinate of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub ymin: Option<f64>,

    /// Maximum imaginary coordinate of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub ymax: Option<f64>,

    /// Resolution multiplier [default: 10]
    #[arg(short = 's', long = "scale", allow_negative_numbers = true)]
    pub scaler: Option<i64>,

    /// Text drawn for each escaped point [default: █]
    #[arg(short = 'p', long = "pixel", allow_hyphen_values = true)]
    pub glyph: Option<String>,

    /// Rotate the colour palette by this many entries
    #[arg(long = "cs", allow_negative_numbers = true)]
    pub color_shift: Option<i64>,

    /// Render a single frame and exit
    #[arg(short = 'f', long = "fixed")]
    pub fixed_frame: bool,

    /// Iteration limit [default: 100]
    #[arg(short = 'i', long = "iterations", allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Render mode: color, number, red, green, blue or gray [default: color]
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<String>,

    /// Clear the screen before each frame
    #[arg(short = 'c', long = "clear")]
    pub clear: bool,
}

impl Cli {
    /// Parses process-style arguments, accepting the single-dash long flags.
    pub fn try_parse_args<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Overlays the given flags on the default settings.
    #[must_use]
    pub fn into_options(self) -> ConfigOptions {
        let defaults = ConfigOptions::default();

        ConfigOptions {
            xmin: self.xmin.unwrap_or(defaults.xmin),
            xmax: self.xmax.unwrap_or(defaults.xmax),
            ymin: self.ymin.unwrap_or(defaults.ymin),
            ymax: self.ymax.unwrap_or(defaults.ymax),
            scaler: self.scaler.unwrap_or(defaults.scaler),
            pan_delta: defaults.pan_delta,
            iteration_limit: self.iterations.unwrap_or(defaults.iteration_limit),
            julia: self.julia.and_then(|values| match values.as_slice() {
                &[real, imag] => Some((real, imag)),
                _ => None,
            }),
            mode: self.mode.unwrap_or(defaults.mode),
            glyph: self.glyph.unwrap_or(defaults.glyph),
            color_shift: self.color_shift.unwrap_or(defaults.color_shift),
            clear_before_render: self.clear,
            fixed_frame: self.fixed_frame,
        }
    }
}

/// Rewrites `-xmin` style flags to `--xmin` so clap does not read them as bundled short flags.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut normalized: Vec<String> = Vec::new();

    for arg in args.into_iter().map(Into::into) {
        let after_text_flag = normalized
            .last()
            .is_some_and(|previous| TEXT_VALUE_FLAGS.contains(&previous.as_str()));

        if !after_text_flag && SINGLE_DASH_LONG_FLAGS.contains(&arg.as_str()) {
            normalized.push(format!("-{}", arg));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
