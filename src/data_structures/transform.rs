//! Local transforms of scene nodes.
//!
//! A transform is stored decomposed as translation, rotation (quaternion) and
//! non-uniform scale, the same way scene node records carry it. Composing two
//! transforms with `*` yields the child's transform in the parent's space.

use std::ops::Mul;

use cgmath::{ElementWise, One, SquareMatrix};

use crate::data_structures::records::SceneNodeRecord;

/// Translation, rotation and scale of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Transform {
    /// Identity transformation (no move, rotate, or scale).
    pub fn identity() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// `true` if the transform mirrors geometry (negative determinant), which
    /// flips the winding order a renderer has to cull with.
    pub fn is_mirrored(&self) -> bool {
        self.to_matrix().determinant() < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&SceneNodeRecord> for Transform {
    fn from(node: &SceneNodeRecord) -> Self {
        let [x, y, z, w] = node.rotation;
        Self {
            position: node.translation.into(),
            rotation: cgmath::Quaternion::new(w, x, y, z),
            scale: node.scale.into(),
        }
    }
}

/// `parent * child`: the child's transform expressed in the parent's space.
///
/// Exact when the parent scale is uniform. A non-uniform parent scale under a
/// rotated child would need shear, which a decomposed transform cannot hold.
impl Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, child: &Transform) -> Self::Output {
        Transform {
            position: self.position + self.rotation * self.scale.mul_element_wise(child.position),
            rotation: self.rotation * child.rotation,
            scale: self.scale.mul_element_wise(child.scale),
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Self;

    fn mul(self, rhs: Transform) -> Self::Output {
        &self * &rhs
    }
}
