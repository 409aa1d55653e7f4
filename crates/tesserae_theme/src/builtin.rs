use std::sync::LazyLock;

use crate::DesignTokens;

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLock<DesignTokens> = LazyLock::new(|| {
                DesignTokens::from_json(include_str!($path))
                    .expect(concat!("bundled theme ", $path, " should be valid"))
            });
        )+
    };
}

generate_builtin_themes!(["../themes/light.json", LIGHT], ["../themes/dark.json", DARK]);
