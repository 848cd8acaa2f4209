use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{BasicSeqGenerator, SeqId, SeqState, Snapshot};

impl Serialize for SeqId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SeqId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct SeqIdVisitor;

        impl de::Visitor<'_> for SeqIdVisitor {
            type Value = SeqId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a string of ASCII letters")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(de::Error::custom)
            }
        }

        d.deserialize_str(SeqIdVisitor)
    }
}

impl Serialize for SeqState {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(s)
    }
}

impl<'de> Deserialize<'de> for SeqState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::deserialize(d)?;
        Self::from_snapshot(&snapshot).map_err(de::Error::custom)
    }
}

impl Serialize for BasicSeqGenerator {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(s)
    }
}

impl<'de> Deserialize<'de> for BasicSeqGenerator {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        SeqState::deserialize(d).map(Self::from)
    }
}

#[cfg(feature = "std")]
impl Serialize for crate::LockSeqGenerator {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(s)
    }
}

#[cfg(feature = "std")]
impl<'de> Deserialize<'de> for crate::LockSeqGenerator {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        SeqState::deserialize(d).map(Self::from)
    }
}
