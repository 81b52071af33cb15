//! Name-based read/write access to shape parameters.

use crate::error::MeshError;
use crate::primitives::{
    BoxParams, CircleParams, CylinderParams, LatheParams, PlaneParams, RingParams,
    SphereParams, TorusKnotParams, TorusParams,
};
use serde::{Deserialize, Serialize};

/// A scalar parameter value.
///
/// Deserializes untagged, so a JSON `5` becomes `Integer` and `5.0` or
/// `2.5` becomes `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl ParameterValue {
    /// Returns the value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            ParameterValue::Float(value) => Some(value),
            ParameterValue::Integer(value) => Some(value as f64),
            ParameterValue::Flag(_) => None,
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Integer(i64::from(value))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Flag(value)
    }
}

/// Field access by schema name, implemented by every parameter record.
pub(crate) trait ParameterAccess {
    fn get(&self, name: &str) -> Option<ParameterValue>;
    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError>;
}

fn float(name: &str, value: ParameterValue) -> Result<f64, MeshError> {
    value
        .as_float()
        .ok_or_else(|| MeshError::invalid_parameter(name, "expected a number, got a flag"))
}

fn integer(name: &str, value: ParameterValue) -> Result<u32, MeshError> {
    match value {
        ParameterValue::Integer(raw) => u32::try_from(raw).map_err(|_| {
            MeshError::invalid_parameter(name, format!("{} is not a valid count", raw))
        }),
        other => Err(MeshError::invalid_parameter(
            name,
            format!("expected an integer, got {:?}", other),
        )),
    }
}

fn flag(name: &str, value: ParameterValue) -> Result<bool, MeshError> {
    match value {
        ParameterValue::Flag(on) => Ok(on),
        other => Err(MeshError::invalid_parameter(
            name,
            format!("expected a flag, got {:?}", other),
        )),
    }
}

fn unknown(name: &str) -> MeshError {
    MeshError::invalid_parameter(name, "unknown parameter")
}

impl ParameterAccess for BoxParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "width" => self.width.into(),
            "height" => self.height.into(),
            "depth" => self.depth.into(),
            "width_segments" => self.width_segments.into(),
            "height_segments" => self.height_segments.into(),
            "depth_segments" => self.depth_segments.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "width" => self.width = float(name, value)?,
            "height" => self.height = float(name, value)?,
            "depth" => self.depth = float(name, value)?,
            "width_segments" => self.width_segments = integer(name, value)?,
            "height_segments" => self.height_segments = integer(name, value)?,
            "depth_segments" => self.depth_segments = integer(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for CylinderParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "top_radius" => self.top_radius.into(),
            "bottom_radius" => self.bottom_radius.into(),
            "height" => self.height.into(),
            "radial_segments" => self.radial_segments.into(),
            "height_segments" => self.height_segments.into(),
            "open_ended" => self.open_ended.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "top_radius" => self.top_radius = float(name, value)?,
            "bottom_radius" => self.bottom_radius = float(name, value)?,
            "height" => self.height = float(name, value)?,
            "radial_segments" => self.radial_segments = integer(name, value)?,
            "height_segments" => self.height_segments = integer(name, value)?,
            "open_ended" => self.open_ended = flag(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for LatheParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "segments" => self.segments.into(),
            "phi_start" => self.phi_start.into(),
            "phi_length" => self.phi_length.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "segments" => self.segments = integer(name, value)?,
            "phi_start" => self.phi_start = float(name, value)?,
            "phi_length" => self.phi_length = float(name, value)?,
            "points" => {
                return Err(MeshError::invalid_parameter(
                    name,
                    "the profile is not a scalar, assign LatheParams::points directly",
                ))
            }
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for SphereParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "radius" => self.radius.into(),
            "width_segments" => self.width_segments.into(),
            "height_segments" => self.height_segments.into(),
            "phi_start" => self.phi_start.into(),
            "phi_length" => self.phi_length.into(),
            "theta_start" => self.theta_start.into(),
            "theta_length" => self.theta_length.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "radius" => self.radius = float(name, value)?,
            "width_segments" => self.width_segments = integer(name, value)?,
            "height_segments" => self.height_segments = integer(name, value)?,
            "phi_start" => self.phi_start = float(name, value)?,
            "phi_length" => self.phi_length = float(name, value)?,
            "theta_start" => self.theta_start = float(name, value)?,
            "theta_length" => self.theta_length = float(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for TorusParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "radius" => self.radius.into(),
            "tube" => self.tube.into(),
            "radial_segments" => self.radial_segments.into(),
            "tubular_segments" => self.tubular_segments.into(),
            "arc" => self.arc.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "radius" => self.radius = float(name, value)?,
            "tube" => self.tube = float(name, value)?,
            "radial_segments" => self.radial_segments = integer(name, value)?,
            "tubular_segments" => self.tubular_segments = integer(name, value)?,
            "arc" => self.arc = float(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for TorusKnotParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "radius" => self.radius.into(),
            "tube" => self.tube.into(),
            "radial_segments" => self.radial_segments.into(),
            "tubular_segments" => self.tubular_segments.into(),
            "p" => self.p.into(),
            "q" => self.q.into(),
            "height_scale" => self.height_scale.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "radius" => self.radius = float(name, value)?,
            "tube" => self.tube = float(name, value)?,
            "radial_segments" => self.radial_segments = integer(name, value)?,
            "tubular_segments" => self.tubular_segments = integer(name, value)?,
            "p" => self.p = integer(name, value)?,
            "q" => self.q = integer(name, value)?,
            "height_scale" => self.height_scale = float(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for CircleParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "radius" => self.radius.into(),
            "segments" => self.segments.into(),
            "start_angle" => self.start_angle.into(),
            "angular_size" => self.angular_size.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "radius" => self.radius = float(name, value)?,
            "segments" => self.segments = integer(name, value)?,
            "start_angle" => self.start_angle = float(name, value)?,
            "angular_size" => self.angular_size = float(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for PlaneParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "width" => self.width.into(),
            "height" => self.height.into(),
            "width_segments" => self.width_segments.into(),
            "height_segments" => self.height_segments.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "width" => self.width = float(name, value)?,
            "height" => self.height = float(name, value)?,
            "width_segments" => self.width_segments = integer(name, value)?,
            "height_segments" => self.height_segments = integer(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

impl ParameterAccess for RingParams {
    fn get(&self, name: &str) -> Option<ParameterValue> {
        Some(match name {
            "inner_radius" => self.inner_radius.into(),
            "outer_radius" => self.outer_radius.into(),
            "theta_segments" => self.theta_segments.into(),
            "phi_segments" => self.phi_segments.into(),
            "theta_start" => self.theta_start.into(),
            "theta_length" => self.theta_length.into(),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: ParameterValue) -> Result<(), MeshError> {
        match name {
            "inner_radius" => self.inner_radius = float(name, value)?,
            "outer_radius" => self.outer_radius = float(name, value)?,
            "theta_segments" => self.theta_segments = integer(name, value)?,
            "phi_segments" => self.phi_segments = integer(name, value)?,
            "theta_start" => self.theta_start = float(name, value)?,
            "theta_length" => self.theta_length = float(name, value)?,
            _ => return Err(unknown(name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widens_to_float() {
        let mut params = BoxParams::default();
        params.set("width", ParameterValue::Integer(3)).unwrap();
        assert_eq!(params.width, 3.0);
    }

    #[test]
    fn test_float_rejected_for_count() {
        let mut params = BoxParams::default();
        let err = params
            .set("width_segments", ParameterValue::Float(3.0))
            .unwrap_err();
        assert_eq!(err.parameter_name(), Some("width_segments"));
        assert_eq!(params.width_segments, BoxParams::default().width_segments);
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut params = CircleParams::default();
        assert!(params.set("segments", ParameterValue::Integer(-4)).is_err());
        assert!(params
            .set("segments", ParameterValue::Integer(i64::from(u32::MAX) + 1))
            .is_err());
    }

    #[test]
    fn test_flag_only_for_flags() {
        let mut params = CylinderParams::default();
        params.set("open_ended", true.into()).unwrap();
        assert!(params.open_ended);
        assert!(params.set("open_ended", ParameterValue::Integer(1)).is_err());
        assert!(params.set("height", true.into()).is_err());
    }

    #[test]
    fn test_unknown_names() {
        let mut params = TorusParams::default();
        assert_eq!(params.get("arc_length"), None);
        let err = params.set("arc_length", 1.0.into()).unwrap_err();
        assert_eq!(err.parameter_name(), Some("arc_length"));
    }

    #[test]
    fn test_lathe_profile_is_not_scalar() {
        let mut params = LatheParams::default();
        assert_eq!(params.get("points"), None);
        assert!(params.set("points", 1.0.into()).is_err());
    }

    #[test]
    fn test_untagged_value_deserialization() {
        let value: ParameterValue = serde_json::from_str("5").unwrap();
        assert_eq!(value, ParameterValue::Integer(5));
        let value: ParameterValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, ParameterValue::Float(2.5));
        let value: ParameterValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, ParameterValue::Flag(true));
    }
}
