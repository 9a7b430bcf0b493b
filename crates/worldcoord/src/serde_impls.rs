//! `serde` support for [`Coord`]: a coordinate is written as a fixed-length tuple of its
//! fields. The frame and kind are type-level only and are not serialized.
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coord::{Coord, Frame, Kind};
use crate::scalar::Scalar;

impl<F: Frame, K: Kind, const N: usize> Serialize for Coord<F, K, N>
where
    F::Scalar: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for v in self.as_array() {
            tup.serialize_element(v)?;
        }
        tup.end()
    }
}

struct CoordVisitor<F, K, const N: usize>(PhantomData<fn() -> (F, K)>);

impl<'de, F: Frame, K: Kind, const N: usize> Visitor<'de> for CoordVisitor<F, K, N>
where
    F::Scalar: Deserialize<'de>,
{
    type Value = Coord<F, K, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {}{} tuple of {} values", F::NAME, K::SUFFIX, N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = [<F::Scalar as Scalar>::ZERO; N];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(Coord::from_array(values))
    }
}

impl<'de, F: Frame, K: Kind, const N: usize> Deserialize<'de> for Coord<F, K, N>
where
    F::Scalar: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, CoordVisitor(PhantomData))
    }
}
