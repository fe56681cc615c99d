//! Type-driven emptiness, used by [`Table::filter_empty`](crate::Table::filter_empty).
//!
//! A value is blank when it is the zero value of its type: the empty string, an empty
//! byte (or any other) sequence, zero, `false`, `None`. `Option` stands in for a
//! pointer, so `Some(x)` is blank exactly when `x` is. Structs opt in through
//! `#[derive(Blank)]`, which treats a struct as blank when every field is blank.
//! Types without a natural zero value should use
//! [`Table::filter_empty_by`](crate::Table::filter_empty_by) with an explicit predicate.

/// The zero value test behind [`Table::filter_empty`](crate::Table::filter_empty).
pub trait Blank {
    fn is_blank(&self) -> bool;
}

macro_rules! impl_blank_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                #[inline]
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_blank_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Blank for f32 {
    #[inline]
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for f64 {
    #[inline]
    fn is_blank(&self) -> bool {
        *self == 0.0
    }
}

impl Blank for bool {
    #[inline]
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Blank for char {
    #[inline]
    fn is_blank(&self) -> bool {
        *self == '\0'
    }
}

impl Blank for () {
    #[inline]
    fn is_blank(&self) -> bool {
        true
    }
}

impl Blank for str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for [T] {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank, const N: usize> Blank for [T; N] {
    fn is_blank(&self) -> bool {
        self.iter().all(Blank::is_blank)
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! impl_blank_tuple {
    ($($name:ident)+) => {
        impl<$($name: Blank),+> Blank for ($($name,)+) {
            #[allow(non_snake_case)]
            fn is_blank(&self) -> bool {
                let ($($name,)+) = self;
                true $(&& $name.is_blank())+
            }
        }
    };
}

impl_blank_tuple!(A);
impl_blank_tuple!(A B);
impl_blank_tuple!(A B C);
impl_blank_tuple!(A B C D);
