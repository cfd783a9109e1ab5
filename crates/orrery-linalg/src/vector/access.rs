//! Named element accessors for 2-, 3- and 4-dimensional vectors.

use super::Vector;

macro_rules! accessors {
    ($len:literal => $($index:literal: $get:ident, $get_mut:ident, $set:ident;)+) => {
        impl<T: Copy> Vector<T, $len> {
            $(
                #[doc = concat!("Returns element ", stringify!($index), ".")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.0[$index]
                }
            )+
        }

        impl<T> Vector<T, $len> {
            $(
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.0[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.0[$index] = value;
                }
            )+
        }
    };
}

accessors!(2 =>
    0: x, x_mut, set_x;
    1: y, y_mut, set_y;
);
accessors!(3 =>
    0: x, x_mut, set_x;
    1: y, y_mut, set_y;
    2: z, z_mut, set_z;
);
accessors!(4 =>
    0: x, x_mut, set_x;
    1: y, y_mut, set_y;
    2: z, z_mut, set_z;
    3: w, w_mut, set_w;
);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Vec3f, Vec4f};

    #[test]
    fn named_access() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X.y(), 0.0);
        assert_eq!(Vec3f::Z.z(), 1.0);
        assert_eq!(Vec4f::W.w(), 1.0);

        let mut v = vec2(0, 1);
        v.set_x(777);
        assert_eq!(v.x(), 777);
        assert_eq!(v[0], 777);
        *v.y_mut() += 8;
        assert_eq!(v, [777, 9]);

        let mut v = vec4(1, 2, 3, 4);
        v[3] = 40;
        assert_eq!(v.w(), 40);
    }
}
