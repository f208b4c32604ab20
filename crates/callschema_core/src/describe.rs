//! Mapping Rust types to [`TypeDescriptor`]s.
//!
//! The `#[callable]` macro emits `<T as DescribeType>::describe()` for every
//! parameter type, so any type used as a parameter must implement
//! [`DescribeType`]. Implementations are provided for primitives, standard
//! containers, and `serde_json` values. User types implement the trait by
//! hand or bridge through [`describe_json_schema`](crate::json_schema::describe_json_schema).

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::descriptor::TypeDescriptor;

/// Types that can describe themselves as a [`TypeDescriptor`].
pub trait DescribeType {
    /// Returns the descriptor for this type.
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_as {
    ($descriptor:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl DescribeType for $ty {
                fn describe() -> TypeDescriptor {
                    $descriptor
                }
            }
        )+
    };
}

describe_as!(TypeDescriptor::STRING => String, str, char);
describe_as!(TypeDescriptor::INTEGER => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
describe_as!(TypeDescriptor::NUMBER => f32, f64);
describe_as!(TypeDescriptor::BOOLEAN => bool);
describe_as!(TypeDescriptor::Null => ());
describe_as!(TypeDescriptor::Unknown => serde_json::Value);
describe_as!(TypeDescriptor::Mapping => serde_json::Map<String, serde_json::Value>);

impl DescribeType for Cow<'_, str> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::STRING
    }
}

impl<T: DescribeType> DescribeType for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::optional(T::describe())
    }
}

macro_rules! describe_list {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: DescribeType, S> DescribeType for $ty<T, S> {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::list(T::describe())
                }
            }
        )+
    };
}

describe_list!(HashSet, IndexSet);

impl<T: DescribeType> DescribeType for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: DescribeType> DescribeType for VecDeque<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: DescribeType> DescribeType for BTreeSet<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: DescribeType> DescribeType for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<T: DescribeType, const N: usize> DescribeType for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::list(T::describe())
    }
}

impl<K, V, S> DescribeType for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Mapping
    }
}

impl<K, V, S> DescribeType for IndexMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Mapping
    }
}

impl<K, V> DescribeType for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Mapping
    }
}

macro_rules! describe_through {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: DescribeType + ?Sized> DescribeType for $ty {
                fn describe() -> TypeDescriptor {
                    T::describe()
                }
            }
        )+
    };
}

describe_through!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
