//! Headless two-way binding between hex, L*a*b* and hue/saturation fields
//!
//! [`Editor`] holds what a color picker displays: six text fields and five
//! integer sliders. Editing any one of them recomputes its siblings through
//! the [`codec`](crate::codec). A sibling is only rewritten when its rounded
//! value differs from the text it already shows, so a field the user is in
//! the middle of typing into is left alone.
//!
//! Every mutating call takes `&mut self` and finishes all of its updates
//! before returning, so an update can never re-enter another one.

use std::fmt;

use tracing::{debug, trace};

use crate::codec;
use crate::color::{Lab, Rgb};
use crate::error::{Error, Result};

/// A slider-backed numeric control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    L,
    A,
    B,
    Hue,
    Saturation,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::L,
        Control::A,
        Control::B,
        Control::Hue,
        Control::Saturation,
    ];

    /// Inclusive slider bounds
    pub const fn range(self) -> (i32, i32) {
        match self {
            Control::L => (0, 100),
            Control::A | Control::B => (-100, 100),
            Control::Hue => (0, 360),
            Control::Saturation => (0, 100),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Control::L => "L*",
            Control::A => "a*",
            Control::B => "b*",
            Control::Hue => "Hue",
            Control::Saturation => "Sat",
        }
    }

    /// Hue and saturation drive a*/b*; the others drive the hex preview
    pub const fn is_polar(self) -> bool {
        matches!(self, Control::Hue | Control::Saturation)
    }

    pub fn clamp(self, value: i32) -> i32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn initial(self) -> i32 {
        match self {
            Control::L => 50,
            _ => 0,
        }
    }
}

/// Any displayed text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hex,
    Control(Control),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Hex => f.write_str("RGB"),
            Field::Control(control) => f.write_str(control.label()),
        }
    }
}

/// Round a computed value for display
///
/// Half away from zero, and negative zero collapses to `0`.
#[inline]
pub fn round_display(value: f64) -> i64 {
    // `as` turns -0.0 into 0 and NaN into 0
    value.round() as i64
}

/// Fields and slider positions of one color picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    hex: String,
    entries: [String; 5],
    sliders: [i32; 5],
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// L* = 50 gray with zero chroma
    pub fn new() -> Self {
        let mut editor = Self {
            hex: String::new(),
            entries: Control::ALL.map(|c| c.initial().to_string()),
            sliders: Control::ALL.map(Control::initial),
        };
        let mut changed = Vec::new();
        editor.apply_lab(&mut changed);
        editor
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Hex => &self.hex,
            Field::Control(control) => &self.entries[control.index()],
        }
    }

    pub fn slider(&self, control: Control) -> i32 {
        self.sliders[control.index()]
    }

    /// L*a*b* as currently set on the sliders
    pub fn lab(&self) -> Lab {
        Lab::new(
            self.slider(Control::L) as f64,
            self.slider(Control::A) as f64,
            self.slider(Control::B) as f64,
        )
    }

    /// Color swatch for the current sliders
    pub fn preview(&self) -> Rgb {
        codec::rgb_from_xyz(codec::xyz_from_lab(self.lab()))
    }

    /// The user typed into the hex field
    ///
    /// Unparsable text is kept in the field and reported; no sibling changes.
    /// Otherwise L*a*b* and hue/saturation follow. The hex field itself is
    /// never rewritten by its own edit.
    pub fn edit_hex(&mut self, text: &str) -> Result<Vec<Field>> {
        self.hex = text.to_string();
        let rgb = Rgb::from_hex(text).inspect_err(|err| {
            debug!(text, %err, "ignoring hex edit");
        })?;

        let mut changed = Vec::new();
        let lab = codec::lab_from_xyz(codec::xyz_from_rgb(rgb));
        for (control, value) in [Control::L, Control::A, Control::B]
            .into_iter()
            .zip(lab.to_array())
        {
            self.write(Field::Control(control), round_display(value).to_string(), &mut changed);
        }
        self.sync_sliders();
        self.refresh_polar(&mut changed);
        Ok(changed)
    }

    /// The user typed into a numeric entry
    pub fn edit_entry(&mut self, control: Control, text: &str) -> Vec<Field> {
        self.entries[control.index()] = text.to_string();
        let mut changed = Vec::new();
        if control.is_polar() {
            self.apply_polar(&mut changed);
        } else {
            self.apply_lab(&mut changed);
        }
        changed
    }

    /// The user dragged a slider
    ///
    /// The value is clamped into the slider's range. Every non-blank entry
    /// that disagrees with its slider is then snapped to the slider value,
    /// so text typed beyond a range is replaced by the clamped number.
    /// Nothing else happens if no entry changed.
    pub fn move_slider(&mut self, control: Control, value: i32) -> Vec<Field> {
        self.sliders[control.index()] = control.clamp(value);

        let mut changed = Vec::new();
        for other in Control::ALL {
            if self.entries[other.index()].is_empty() {
                continue;
            }
            let value = self.slider(other).to_string();
            self.write(Field::Control(other), value, &mut changed);
        }
        if changed.is_empty() {
            return changed;
        }
        if control.is_polar() {
            self.apply_polar(&mut changed);
        } else {
            self.apply_lab(&mut changed);
        }
        changed
    }

    fn apply_lab(&mut self, changed: &mut Vec<Field>) {
        self.sync_sliders();
        self.refresh_polar(changed);
        self.refresh_hex(changed);
    }

    fn apply_polar(&mut self, changed: &mut Vec<Field>) {
        match (
            self.parse_entry(Control::Hue),
            self.parse_entry(Control::Saturation),
        ) {
            (Ok(hue), Ok(saturation)) => {
                let (a, b) = codec::ab_from_polar(hue as f64, saturation as f64);
                self.write(Field::Control(Control::A), round_display(a).to_string(), changed);
                self.write(Field::Control(Control::B), round_display(b).to_string(), changed);
            }
            (Err(err), _) | (_, Err(err)) => debug!(%err, "hue/saturation not applied"),
        }
        self.sync_sliders();
        self.refresh_hex(changed);
    }

    /// Move every slider to its entry's value, clamped into range. Entries
    /// that do not hold an integer leave their slider where it was.
    fn sync_sliders(&mut self) {
        for control in Control::ALL {
            match self.parse_entry(control) {
                Ok(value) => self.sliders[control.index()] = control.clamp(value),
                Err(err) => debug!(%err, "slider left in place"),
            }
        }
    }

    /// Recompute hue/saturation from the a*/b* sliders. Their entries and
    /// sliders both take the rounded values.
    fn refresh_polar(&mut self, changed: &mut Vec<Field>) {
        let polar = codec::polar_from_ab(
            self.slider(Control::A) as f64,
            self.slider(Control::B) as f64,
        );
        for (control, value) in [
            (Control::Hue, polar.hue),
            (Control::Saturation, polar.saturation),
        ] {
            let shown = round_display(value);
            self.write(Field::Control(control), shown.to_string(), changed);
            self.sliders[control.index()] = control.clamp(shown as i32);
        }
    }

    fn refresh_hex(&mut self, changed: &mut Vec<Field>) {
        let hex = self.preview().to_hex();
        self.write(Field::Hex, hex, changed);
    }

    fn parse_entry(&self, control: Control) -> Result<i32> {
        let text = &self.entries[control.index()];
        text.trim().parse().map_err(|_| Error::InvalidNumber {
            field: control.label(),
            text: text.clone(),
        })
    }

    fn write(&mut self, field: Field, value: String, changed: &mut Vec<Field>) {
        let slot = match field {
            Field::Hex => &mut self.hex,
            Field::Control(control) => &mut self.entries[control.index()],
        };
        if *slot != value {
            trace!(%field, from = %slot, to = %value, "rewriting field");
            *slot = value;
            changed.push(field);
        }
    }
}
