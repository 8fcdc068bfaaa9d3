//! Design parameter schema
//!
//! A flat, fully defaulted record of the parameters collected on the
//! parameters step, grouped into four sections. Fields are independently
//! mutable with last-write-wins semantics. The only dependent choice is
//! Core Material, whose options come from the selected Core Type.
//!
//! Documented slider ranges live in [`FieldRange`]; they are applied by the
//! stepping helpers the TUI uses, never by [`ParameterSet::set`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Logical grouping of parameter fields (the tabs of the parameter form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ParameterSection {
    #[default]
    Electrical,
    Material,
    Thermal,
    Constraints,
}

impl ParameterSection {
    /// Card title for the section
    pub fn title(self) -> &'static str {
        match self {
            Self::Electrical => "Power & Voltage Specifications",
            Self::Material => "Core Selection",
            Self::Thermal => "Thermal Management",
            Self::Constraints => "Design Constraints",
        }
    }

    /// Fields belonging to this section in form order
    pub fn fields(self) -> impl Iterator<Item = ParameterField> {
        ParameterField::iter().filter(move |f| f.section() == self)
    }
}

/// Magnetic core type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CoreType {
    Ferrite,
    IronPowder,
    Sendust,
    Mpp,
    HighFlux,
    KoolMu,
}

impl CoreType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ferrite => "Ferrite",
            Self::IronPowder => "Iron Powder",
            Self::Sendust => "Sendust",
            Self::Mpp => "MPP (Molypermalloy)",
            Self::HighFlux => "High Flux",
            Self::KoolMu => "Kool Mμ",
        }
    }

    /// Core materials offered for this core type
    pub fn materials(self) -> &'static [&'static str] {
        match self {
            Self::Ferrite => &["3C90", "3C94", "3F3", "N27", "N87", "N97"],
            Self::IronPowder => &["Iron-2", "Iron-8", "Iron-18", "Iron-26", "Iron-52"],
            Self::Sendust => &["Sendust-60", "Sendust-75", "Sendust-90", "Sendust-125"],
            Self::Mpp => &["MPP-60", "MPP-125", "MPP-147", "MPP-173", "MPP-200"],
            Self::HighFlux => &["HF-60", "HF-125", "HF-147", "HF-160"],
            Self::KoolMu => &["KoolMu-60", "KoolMu-75", "KoolMu-90", "KoolMu-125"],
        }
    }

    pub fn offers(self, material: &str) -> bool {
        self.materials().contains(&material)
    }
}

/// Magnetic core geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CoreShape {
    Toroidal,
    Etd,
    Ee,
    Pot,
    Planar,
    Custom,
}

impl CoreShape {
    pub fn label(self) -> &'static str {
        match self {
            Self::Toroidal => "Toroidal (T)",
            Self::Etd => "ETD",
            Self::Ee => "EE",
            Self::Pot => "Pot Core",
            Self::Planar => "Planar",
            Self::Custom => "Custom Shape",
        }
    }
}

/// Winding conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WindingMaterial {
    #[default]
    Copper,
    Aluminum,
    Litz,
    Foil,
}

impl WindingMaterial {
    pub fn label(self) -> &'static str {
        match self {
            Self::Copper => "Copper Wire",
            Self::Aluminum => "Aluminum Wire",
            Self::Litz => "Litz Wire",
            Self::Foil => "Copper Foil",
        }
    }
}

/// Documented slider range of a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into the range and snap to the nearest step from `min`
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// One slider notch up
    pub fn step_up(&self, value: f64) -> f64 {
        self.snap(self.snap(value) + self.step)
    }

    /// One slider notch down
    pub fn step_down(&self, value: f64) -> f64 {
        self.snap(self.snap(value) - self.step)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Value kind accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldKind {
    Number,
    CoreType,
    CoreShape,
    CoreMaterial,
    WindingMaterial,
}

/// Every recognized parameter, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum ParameterField {
    PowerLevel,
    InputVoltage,
    OutputVoltage,
    OutputCurrent,
    SwitchingFrequency,
    DutyCycle,
    RippleCurrent,
    RippleVoltage,
    CoreType,
    CoreShape,
    CoreMaterial,
    WindingMaterial,
    AmbientTemp,
    MaxTemp,
    ThermalResistance,
    MaxHeight,
    MaxWeight,
    Efficiency,
}

impl ParameterField {
    pub fn section(self) -> ParameterSection {
        match self {
            Self::PowerLevel
            | Self::InputVoltage
            | Self::OutputVoltage
            | Self::OutputCurrent
            | Self::SwitchingFrequency
            | Self::DutyCycle
            | Self::RippleCurrent
            | Self::RippleVoltage => ParameterSection::Electrical,
            Self::CoreType | Self::CoreShape | Self::CoreMaterial | Self::WindingMaterial => {
                ParameterSection::Material
            }
            Self::AmbientTemp | Self::MaxTemp | Self::ThermalResistance => {
                ParameterSection::Thermal
            }
            Self::MaxHeight | Self::MaxWeight | Self::Efficiency => ParameterSection::Constraints,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::CoreType => FieldKind::CoreType,
            Self::CoreShape => FieldKind::CoreShape,
            Self::CoreMaterial => FieldKind::CoreMaterial,
            Self::WindingMaterial => FieldKind::WindingMaterial,
            _ => FieldKind::Number,
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Self::PowerLevel => "Power Level",
            Self::InputVoltage => "Input Voltage",
            Self::OutputVoltage => "Output Voltage",
            Self::OutputCurrent => "Output Current",
            Self::SwitchingFrequency => "Switching Frequency",
            Self::DutyCycle => "Duty Cycle",
            Self::RippleCurrent => "Current Ripple",
            Self::RippleVoltage => "Voltage Ripple",
            Self::CoreType => "Core Type",
            Self::CoreShape => "Core Shape",
            Self::CoreMaterial => "Core Material",
            Self::WindingMaterial => "Winding Material",
            Self::AmbientTemp => "Ambient Temperature",
            Self::MaxTemp => "Maximum Temperature",
            Self::ThermalResistance => "Thermal Resistance",
            Self::MaxHeight => "Maximum Height",
            Self::MaxWeight => "Maximum Weight",
            Self::Efficiency => "Target Efficiency",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::PowerLevel => Some("W"),
            Self::InputVoltage | Self::OutputVoltage => Some("V"),
            Self::OutputCurrent => Some("A"),
            Self::SwitchingFrequency => Some("kHz"),
            Self::AmbientTemp | Self::MaxTemp => Some("°C"),
            Self::MaxHeight => Some("mm"),
            Self::MaxWeight => Some("g"),
            Self::Efficiency => Some("%"),
            _ => None,
        }
    }

    /// Documented slider range, if the field has one
    pub fn range(self) -> Option<FieldRange> {
        match self {
            Self::SwitchingFrequency => Some(FieldRange::new(10.0, 500.0, 10.0)),
            Self::DutyCycle => Some(FieldRange::new(0.1, 0.9, 0.01)),
            Self::RippleCurrent => Some(FieldRange::new(0.1, 0.5, 0.01)),
            Self::Efficiency => Some(FieldRange::new(80.0, 99.0, 1.0)),
            _ => None,
        }
    }

    /// Ratio fields displayed as a percentage
    fn is_percent_ratio(self) -> bool {
        matches!(self, Self::DutyCycle | Self::RippleCurrent)
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Number(f64),
    CoreType(Option<CoreType>),
    CoreShape(Option<CoreShape>),
    CoreMaterial(Option<String>),
    WindingMaterial(WindingMaterial),
}

impl ParameterValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Number(_) => FieldKind::Number,
            Self::CoreType(_) => FieldKind::CoreType,
            Self::CoreShape(_) => FieldKind::CoreShape,
            Self::CoreMaterial(_) => FieldKind::CoreMaterial,
            Self::WindingMaterial(_) => FieldKind::WindingMaterial,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} expects a {expected} value, got {actual}")]
    KindMismatch {
        field: ParameterField,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: ParameterField, value: f64 },

    #[error("Select a core type before choosing core material '{material}'")]
    NoCoreType { material: String },

    #[error("Core material '{material}' is not offered for {core_type} cores")]
    MaterialNotOffered { material: String, core_type: CoreType },
}

/// The parameter record collected by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    // Electrical
    pub power_level: f64,
    pub input_voltage: f64,
    pub output_voltage: f64,
    pub output_current: f64,
    pub switching_frequency: f64,
    pub duty_cycle: f64,
    pub ripple_current: f64,
    pub ripple_voltage: f64,

    // Material
    pub core_type: Option<CoreType>,
    pub core_shape: Option<CoreShape>,
    pub core_material: Option<String>,
    pub winding_material: WindingMaterial,

    // Thermal
    pub ambient_temp: f64,
    pub max_temp: f64,
    pub thermal_resistance: f64,

    // Constraints
    pub max_height: f64,
    pub max_weight: f64,
    pub efficiency: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            power_level: 100.0,
            input_voltage: 12.0,
            output_voltage: 5.0,
            output_current: 20.0,
            switching_frequency: 100.0,
            duty_cycle: 0.42,
            ripple_current: 0.3,
            ripple_voltage: 0.1,
            core_type: None,
            core_shape: None,
            core_material: None,
            winding_material: WindingMaterial::Copper,
            ambient_temp: 25.0,
            max_temp: 85.0,
            thermal_resistance: 0.5,
            max_height: 10.0,
            max_weight: 50.0,
            efficiency: 95.0,
        }
    }
}

impl ParameterSet {
    fn number_mut(&mut self, field: ParameterField) -> Option<&mut f64> {
        let slot = match field {
            ParameterField::PowerLevel => &mut self.power_level,
            ParameterField::InputVoltage => &mut self.input_voltage,
            ParameterField::OutputVoltage => &mut self.output_voltage,
            ParameterField::OutputCurrent => &mut self.output_current,
            ParameterField::SwitchingFrequency => &mut self.switching_frequency,
            ParameterField::DutyCycle => &mut self.duty_cycle,
            ParameterField::RippleCurrent => &mut self.ripple_current,
            ParameterField::RippleVoltage => &mut self.ripple_voltage,
            ParameterField::AmbientTemp => &mut self.ambient_temp,
            ParameterField::MaxTemp => &mut self.max_temp,
            ParameterField::ThermalResistance => &mut self.thermal_resistance,
            ParameterField::MaxHeight => &mut self.max_height,
            ParameterField::MaxWeight => &mut self.max_weight,
            ParameterField::Efficiency => &mut self.efficiency,
            ParameterField::CoreType
            | ParameterField::CoreShape
            | ParameterField::CoreMaterial
            | ParameterField::WindingMaterial => return None,
        };
        Some(slot)
    }

    /// Read a numeric field; `None` for choice fields
    pub fn number(&self, field: ParameterField) -> Option<f64> {
        match self.get(field) {
            ParameterValue::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Read any field
    pub fn get(&self, field: ParameterField) -> ParameterValue {
        match field {
            ParameterField::PowerLevel => ParameterValue::Number(self.power_level),
            ParameterField::InputVoltage => ParameterValue::Number(self.input_voltage),
            ParameterField::OutputVoltage => ParameterValue::Number(self.output_voltage),
            ParameterField::OutputCurrent => ParameterValue::Number(self.output_current),
            ParameterField::SwitchingFrequency => ParameterValue::Number(self.switching_frequency),
            ParameterField::DutyCycle => ParameterValue::Number(self.duty_cycle),
            ParameterField::RippleCurrent => ParameterValue::Number(self.ripple_current),
            ParameterField::RippleVoltage => ParameterValue::Number(self.ripple_voltage),
            ParameterField::CoreType => ParameterValue::CoreType(self.core_type),
            ParameterField::CoreShape => ParameterValue::CoreShape(self.core_shape),
            ParameterField::CoreMaterial => ParameterValue::CoreMaterial(self.core_material.clone()),
            ParameterField::WindingMaterial => ParameterValue::WindingMaterial(self.winding_material),
            ParameterField::AmbientTemp => ParameterValue::Number(self.ambient_temp),
            ParameterField::MaxTemp => ParameterValue::Number(self.max_temp),
            ParameterField::ThermalResistance => ParameterValue::Number(self.thermal_resistance),
            ParameterField::MaxHeight => ParameterValue::Number(self.max_height),
            ParameterField::MaxWeight => ParameterValue::Number(self.max_weight),
            ParameterField::Efficiency => ParameterValue::Number(self.efficiency),
        }
    }

    /// Set one field (last write wins).
    ///
    /// Changing the core type leaves an existing core material in place even
    /// when the new type does not offer it; see
    /// [`has_stale_core_material`](Self::has_stale_core_material).
    ///
    /// # Errors
    ///
    /// - `KindMismatch` if the value kind does not match the field
    /// - `NotFinite` for NaN or infinite numbers
    /// - `NoCoreType` / `MaterialNotOffered` for a core material the current
    ///   core type does not list
    pub fn set(&mut self, field: ParameterField, value: ParameterValue) -> Result<(), ParameterError> {
        if value.kind() != field.kind() {
            return Err(ParameterError::KindMismatch {
                field,
                expected: field.kind(),
                actual: value.kind(),
            });
        }

        match value {
            ParameterValue::Number(number) => {
                if !number.is_finite() {
                    return Err(ParameterError::NotFinite { field, value: number });
                }
                if let Some(slot) = self.number_mut(field) {
                    *slot = number;
                }
            }
            ParameterValue::CoreType(core_type) => self.core_type = core_type,
            ParameterValue::CoreShape(shape) => self.core_shape = shape,
            ParameterValue::CoreMaterial(material) => {
                if let Some(ref material) = material {
                    match self.core_type {
                        None => {
                            return Err(ParameterError::NoCoreType {
                                material: material.clone(),
                            });
                        }
                        Some(core_type) if !core_type.offers(material) => {
                            return Err(ParameterError::MaterialNotOffered {
                                material: material.clone(),
                                core_type,
                            });
                        }
                        Some(_) => {}
                    }
                }
                self.core_material = material;
            }
            ParameterValue::WindingMaterial(winding) => self.winding_material = winding,
        }
        Ok(())
    }

    /// Convenience for numeric fields
    pub fn set_number(&mut self, field: ParameterField, value: f64) -> Result<(), ParameterError> {
        self.set(field, ParameterValue::Number(value))
    }

    /// Core materials selectable for the current core type (empty when unset)
    pub fn available_core_materials(&self) -> &'static [&'static str] {
        self.core_type.map(CoreType::materials).unwrap_or(&[])
    }

    /// True when a core material is set that the current core type does not offer
    pub fn has_stale_core_material(&self) -> bool {
        match (&self.core_material, self.core_type) {
            (Some(material), Some(core_type)) => !core_type.offers(material),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Human readable value of a field, with its unit
    pub fn display_value(&self, field: ParameterField) -> String {
        match self.get(field) {
            ParameterValue::Number(value) if field.is_percent_ratio() => {
                format!("{:.1}%", value * 100.0)
            }
            ParameterValue::Number(value) => match field.unit() {
                Some(unit) => format!("{} {}", value, unit),
                None => value.to_string(),
            },
            ParameterValue::CoreType(core_type) => {
                core_type.map_or("Select core type", CoreType::label).to_string()
            }
            ParameterValue::CoreShape(shape) => {
                shape.map_or("Select core shape", CoreShape::label).to_string()
            }
            ParameterValue::CoreMaterial(material) => {
                material.unwrap_or_else(|| "Select core material".to_string())
            }
            ParameterValue::WindingMaterial(winding) => winding.label().to_string(),
        }
    }
}
