//! What the CLI prints for one color

use std::fmt;

use labrat_core::{Editor, Field, Lab, Polar, Rgb, Xyz, codec, round_display};
use serde::Serialize;

/// Every representation of one color
///
/// Serialized unrounded; the text form rounds L*a*b* and hue/saturation the
/// same way the picker fields do.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub hex: String,
    pub rgb: Rgb,
    pub xyz: Xyz,
    pub lab: Lab,
    pub polar: Polar,
}

impl Report {
    /// Display direction: start from an sRGB color
    pub fn from_rgb(rgb: Rgb) -> Self {
        let xyz = codec::xyz_from_rgb(rgb);
        let lab = codec::lab_from_xyz(xyz);
        Self {
            hex: rgb.to_hex(),
            rgb,
            xyz,
            lab,
            polar: codec::polar_from_ab(lab.a, lab.b),
        }
    }

    /// Preview direction: start from L*a*b*, which may be out of gamut
    pub fn from_lab(lab: Lab) -> Self {
        let xyz = codec::xyz_from_lab(lab);
        let rgb = codec::rgb_from_xyz(xyz);
        Self {
            hex: rgb.to_hex(),
            rgb,
            xyz,
            lab,
            polar: codec::polar_from_ab(lab.a, lab.b),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "RGB     {}  ({}, {}, {})",
            self.hex, self.rgb.r, self.rgb.g, self.rgb.b
        )?;
        writeln!(
            f,
            "XYZ     {:.3} {:.3} {:.3}",
            self.xyz.x, self.xyz.y, self.xyz.z
        )?;
        writeln!(
            f,
            "L*a*b*  {} {} {}",
            round_display(self.lab.l),
            round_display(self.lab.a),
            round_display(self.lab.b)
        )?;
        write!(
            f,
            "Hue/Sat {} {}",
            round_display(self.polar.hue),
            round_display(self.polar.saturation)
        )
    }
}

/// The six picker fields as text, in on-screen order
#[derive(Debug, Clone, Serialize)]
pub struct FieldsReport {
    pub fields: Vec<(String, String)>,
}

impl FieldsReport {
    pub fn from_editor(editor: &Editor) -> Self {
        let order = [Field::Hex]
            .into_iter()
            .chain(labrat_core::Control::ALL.map(Field::Control));
        Self {
            fields: order
                .map(|field| (field.to_string(), editor.text(field).to_string()))
                .collect(),
        }
    }
}

impl fmt::Display for FieldsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, text)) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name:<4} {text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_from_rgb() {
        let text = Report::from_rgb(Rgb::new(255, 0, 0)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "RGB     #ff0000  (255, 0, 0)");
        assert_eq!(lines[1], "XYZ     41.246 21.267 1.933");
        assert_eq!(lines[2], "L*a*b*  53 80 67");
        assert_eq!(lines[3], "Hue/Sat 40 74");
    }

    #[test]
    fn test_from_lab_keeps_input() {
        let report = Report::from_lab(Lab::new(50.0, 100.0, 100.0));
        assert_eq!(report.hex, "#ff0000");
        assert_eq!(report.lab, Lab::new(50.0, 100.0, 100.0));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(Report::from_rgb(Rgb::BLACK)).unwrap();
        assert_eq!(value["hex"], "#000000");
        assert_eq!(value["rgb"]["g"], 0);
        assert!(value["lab"]["l"].as_f64().unwrap().abs() < 1e-9);
        assert_eq!(value["polar"]["hue"], 0.0);
    }

    #[test]
    fn test_fields_report() {
        let report = FieldsReport::from_editor(&Editor::new());
        assert_eq!(report.fields[0], ("RGB".to_string(), "#777777".to_string()));
        assert_eq!(report.fields.len(), 6);
        assert!(report.to_string().starts_with("RGB  #777777\nL*   50"));
    }
}
