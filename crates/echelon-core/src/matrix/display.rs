//! `Display` formatting for [`Matrix`].

use core::fmt;

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "matrix([], dims={}x{})", self.width, self.height);
        }

        writeln!(f, "matrix([")?;
        for y in 0..self.height {
            write!(f, "  [")?;
            for (x, v) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            if y < self.height - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}
