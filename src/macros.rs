//! The `miniyaml!` macro for building node lists in code.
//!
//! Each entry is `"Key": value`, where value is one of:
//!
//! - an expression, stored via `ToString` (`"cnc"`, `2`, `some_var`)
//! - `null`, for a key with neither value nor children
//! - `{ ... }`, for a key with children and no value
//! - `(value, { ... })`, for a key with both

#[macro_export]
macro_rules! miniyaml {
    // Handle empty document
    ({}) => {
        ::std::vec::Vec::<$crate::Node>::new()
    };

    // Handle a list of entries
    ({ $($key:literal : $value:tt),* $(,)? }) => {
        ::std::vec![$($crate::miniyaml!(@node $key, $value)),*]
    };

    (@node $key:expr, null) => {
        $crate::Node::new($key, $crate::Content::default())
    };

    (@node $key:expr, { $($inner:tt)* }) => {
        $crate::Node::with_children($key, None, $crate::miniyaml!({ $($inner)* }))
    };

    (@node $key:expr, ($value:expr, { $($inner:tt)* })) => {
        $crate::Node::with_children(
            $key,
            Some(::std::string::ToString::to_string(&$value)),
            $crate::miniyaml!({ $($inner)* }),
        )
    };

    (@node $key:expr, $value:expr) => {
        $crate::Node::scalar($key, ::std::string::ToString::to_string(&$value))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Content, Node};

    #[test]
    fn test_miniyaml_macro_scalars() {
        let max_players = 2;
        let nodes = miniyaml!({
            "Mod": "cnc",
            "MaxPlayers": max_players,
            "Protected": false,
        });

        assert_eq!(
            nodes,
            vec![
                Node::scalar("Mod", "cnc"),
                Node::scalar("MaxPlayers", "2"),
                Node::scalar("Protected", "false"),
            ]
        );
    }

    #[test]
    fn test_miniyaml_macro_nesting() {
        assert!(miniyaml!({}).is_empty());

        let nodes = miniyaml!({
            "Game": {
                "Protocol": 2,
                "Clients": null
            },
            "Player": ("Multi0", {
                "Faction": "gdi"
            })
        });

        assert_eq!(nodes.len(), 2);
        let game = &nodes[0];
        assert_eq!(game.value.as_str(), None);
        assert_eq!(game.value.children[1], Node::new("Clients", Content::default()));

        let player = &nodes[1];
        assert_eq!(player.value.as_str(), Some("Multi0"));
        assert_eq!(player.value.children, vec![Node::scalar("Faction", "gdi")]);
    }
}
