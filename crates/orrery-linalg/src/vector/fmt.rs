//! Text formatting and parsing.

use std::{fmt, str::FromStr};

use crate::error::Error;

use super::Vector;

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Writes the elements separated by single spaces, e.g. `1 2 3`.
///
/// Formatting options such as precision apply to every element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            elem.fmt(f)?;
        }
        Ok(())
    }
}

/// Parses exactly `N` whitespace-separated elements, the format written by [`fmt::Display`].
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let v: Vec3<i32> = "1 -2  3".parse().unwrap();
/// assert_eq!(v, vec3(1, -2, 3));
///
/// let err = "1 2".parse::<Vec3<i32>>().unwrap_err();
/// assert_eq!(err, Error::ComponentCount { expected: 3, found: 2 });
/// ```
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        if parts.len() != N {
            return Err(Error::ComponentCount {
                expected: N,
                found: parts.len(),
            });
        }

        let elems = parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                part.parse().map_err(|e: T::Err| Error::InvalidComponent {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        let elems: [T; N] = elems.try_into().map_err(|elems: Vec<T>| Error::ComponentCount {
            expected: N,
            found: elems.len(),
        })?;
        Ok(Self(elems))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Error, Vec2f, Vec4f, Vector};

    #[test]
    fn display() {
        assert_eq!(Vec4f::W.to_string(), "0 0 0 1");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0)), "0.50 1.00");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn parse() {
        assert_eq!("0.5 -1".parse::<Vec2f>(), Ok(vec2(0.5, -1.0)));
        assert_eq!(
            "1 2 3".parse::<Vec2f>(),
            Err(Error::ComponentCount {
                expected: 2,
                found: 3
            })
        );
        match "1 x".parse::<Vector<i32, 2>>() {
            Err(Error::InvalidComponent { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result {other:?}"),
        }

        let v = vec2(1.25f32, -3.0);
        assert_eq!(v.to_string().parse::<Vec2f>(), Ok(v));
    }
}
