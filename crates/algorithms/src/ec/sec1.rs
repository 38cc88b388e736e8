//! SEC1 point encoding (SEC 1 v2, section 2.3.3 and 2.3.4)

use subtle::{Choice, ConditionallySelectable};

use crate::ec::affine::curve_rhs;
use crate::ec::{AffinePoint, Curve, Field};
use crate::error::{Error, Result};

/// Format of a SEC1-encoded point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity: a single 0x00 byte
    Identity,
    /// 0x04 || x || y
    Uncompressed,
    /// 0x02/0x03 || x, the tag carrying the parity of y
    Compressed,
}

impl PointFormat {
    /// Classify an encoding by its tag and length.
    pub fn detect<C: Curve>(bytes: &[u8]) -> Result<Self> {
        let n = C::Field::BYTES;
        match (bytes.first(), bytes.len()) {
            (Some(0x00), 1) => Ok(PointFormat::Identity),
            (Some(0x04), len) if len == 1 + 2 * n => Ok(PointFormat::Uncompressed),
            (Some(0x02 | 0x03), len) if len == 1 + n => Ok(PointFormat::Compressed),
            (None, _) => Err(Error::InvalidLength {
                context: "SEC1 point",
                expected: 1 + n,
                actual: 0,
            }),
            _ => Err(Error::encoding("SEC1 point", "unknown tag or length")),
        }
    }
}

impl<C: Curve> AffinePoint<C> {
    /// Encode in compressed or uncompressed form; the identity is `0x00`.
    pub fn to_sec1(&self, compress: bool) -> Vec<u8> {
        if bool::from(self.infinity) {
            return vec![0x00];
        }
        let n = C::Field::BYTES;
        if compress {
            let mut out = vec![0u8; 1 + n];
            out[0] = 0x02 | self.y.is_odd().unwrap_u8();
            self.x.write_be_bytes(&mut out[1..]);
            out
        } else {
            let mut out = vec![0u8; 1 + 2 * n];
            out[0] = 0x04;
            self.x.write_be_bytes(&mut out[1..1 + n]);
            self.y.write_be_bytes(&mut out[1 + n..]);
            out
        }
    }

    /// Decode either form and validate the result.
    ///
    /// # Errors
    /// `InvalidEncoding` for a bad tag, length or coordinate, `InvalidPoint`
    /// when the coordinates do not describe a point of the subgroup.
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        let n = C::Field::BYTES;
        let point = match PointFormat::detect::<C>(bytes)? {
            PointFormat::Identity => return Ok(Self::identity()),
            PointFormat::Uncompressed => {
                let x = C::Field::from_be_bytes(&bytes[1..1 + n])?;
                let y = C::Field::from_be_bytes(&bytes[1 + n..])?;
                Self::from_coordinates_unchecked(x, y)
            }
            PointFormat::Compressed => {
                let x = C::Field::from_be_bytes(&bytes[1..])?;
                Self::decompress(&x, Choice::from(bytes[0] & 1))?
            }
        };
        if let Err(e) = point.validate() {
            log::trace!("rejected {} point during SEC1 decoding", C::NAME);
            return Err(e);
        }
        Ok(point)
    }

    /// The point with abscissa `x` whose ordinate has parity `y_is_odd`.
    pub fn decompress(x: &C::Field, y_is_odd: Choice) -> Result<Self> {
        let alpha = curve_rhs::<C>(x);
        let beta = alpha
            .sqrt()
            .ok_or_else(|| Error::point(C::NAME, "x coordinate is not on the curve"))?;
        let flip = beta.is_odd() ^ y_is_odd;
        let y = C::Field::conditional_select(&beta, &beta.negate(), flip);
        if bool::from(y.is_odd() ^ y_is_odd) {
            // y = 0 has no odd root
            return Err(Error::point(C::NAME, "no ordinate with the requested parity"));
        }
        Ok(Self::from_coordinates_unchecked(*x, y))
    }
}
