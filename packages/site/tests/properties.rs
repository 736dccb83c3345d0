use proptest::prelude::*;
use site::{Catalog, Lang, Localizer, Navigator, Page};

fn page() -> impl Strategy<Value = Page> {
    proptest::sample::select(Page::ALL.to_vec())
}

fn shipped_key() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(Catalog::global().keys(Lang::En))
}

proptest! {
    #[test]
    fn navigate_lands_on_target(pages in proptest::collection::vec(page(), 1..20)) {
        let mut nav = Navigator::new();
        for p in pages {
            nav.navigate(p);
            prop_assert_eq!(nav.current(), p);
        }
    }

    #[test]
    fn unknown_identifiers_go_home(start in page(), key in "[a-z_]{1,12}") {
        prop_assume!(key.parse::<Page>().is_err());
        let mut nav = Navigator::new();
        nav.navigate(start);
        nav.navigate_to_key(&key);
        prop_assert_eq!(nav.current(), Page::Home);
    }

    #[test]
    fn language_switch_round_trips(key in shipped_key()) {
        let catalog = Catalog::global();
        let mut loc = Localizer::default();
        let en = loc.translate(key);
        prop_assert_eq!(Some(en.as_str()), catalog.lookup(Lang::En, key));

        loc.set_language(Lang::Fr);
        let fr = loc.translate(key);
        prop_assert_eq!(Some(fr.as_str()), catalog.lookup(Lang::Fr, key));

        loc.set_language(Lang::En);
        prop_assert_eq!(loc.translate(key), en);
    }

    #[test]
    fn absent_keys_fall_back_to_themselves(key in "[a-z]{1,8}\\.[a-z0-9_.]{1,16}", fr in any::<bool>()) {
        let lang = if fr { Lang::Fr } else { Lang::En };
        prop_assume!(!Catalog::global().contains(lang, &key));
        prop_assert_eq!(Localizer::new(lang).translate(&key), key);
    }
}
