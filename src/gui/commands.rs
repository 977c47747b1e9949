macro_rules! selector {
    ($(#[$m:meta])* $vis: vis $id: ident: $t: ty) => {
        $(#[$m])*
        $vis const $id: druid::Selector<$t> = druid::Selector::new(concat!(module_path!(), "::", stringify!($id)));
    };
    ($(#[$m:meta])* $vis: vis $id: ident) => {
        selector!{ $(#[$m])* $vis $id: () }
    };
}

selector! {
    /// The pointer left the canvas; sent by the canvas to itself.
    pub CLEAR_CURSOR
}

selector! {
    /// Render the canvas into a PNG under the export directory.
    pub SAVE_IMAGE
}
