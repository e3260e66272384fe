// criteria
/// Build [`Criteria`](crate::db::criteria::Criteria) with keyword syntax.
///
/// `criteria!(status__name = "ok", id__gt = 3)`; keys that are not Rust
/// identifiers use string literals: `criteria!("type__name" => "x")`.
#[macro_export]
macro_rules! criteria {
    () => {
        $crate::db::criteria::Criteria::new()
    };
    ( $( $key:ident = $value:expr ),+ $(,)? ) => {
        $crate::db::criteria::Criteria::new()
            $( .with(stringify!($key), $value) )+
    };
    ( $( $key:literal => $value:expr ),+ $(,)? ) => {
        $crate::db::criteria::Criteria::new()
            $( .with($key, $value) )+
    };
}

// q
/// A leaf [`Q`](crate::db::logical::Q) over `criteria!` arguments.
#[macro_export]
macro_rules! q {
    ( $( $tt:tt )* ) => {
        $crate::db::logical::Q::new($crate::criteria!( $( $tt )* ))
    };
}
