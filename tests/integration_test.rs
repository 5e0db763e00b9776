use access_recipe::access::BehaviourKind;
use access_recipe::factory::ClientFactory;
use access_recipe::handlers::{
    Channel, ClientHandler, EnterpriseClientHandler, RetailClientHandler,
};
use access_recipe::lifecycle::{AccessConfig, AccessOutcome, AccessSystem, ClientSpec};
use access_recipe::model::ClientKind;

/// Every recognised tag yields a client with a non-empty auth string.
#[test]
fn test_factory_builds_every_known_kind() {
    let factory = ClientFactory::new();

    for kind in ClientKind::ALL {
        let client = factory
            .create_client(kind.as_str(), "bob")
            .expect("known tag must build a client");
        assert_eq!(client.kind(), kind);
        assert!(!client.auth_string().is_empty());
        assert_eq!(client.has_access(), kind.default_access());
    }

    assert_eq!(factory.create_client("User", "bob").unwrap().auth_string(), "bob");
    assert_eq!(factory.create_client("Manager", "bob").unwrap().auth_string(), "bobMAN");
    assert_eq!(factory.create_client("Admin", "bob").unwrap().auth_string(), "bobADMIN");
}

/// The per-channel mapping table, checked end to end through `create_client`.
#[test]
fn test_handlers_select_behaviour_per_channel() {
    let retail = RetailClientHandler::new();
    let enterprise = EnterpriseClientHandler::new();

    let cases = [
        ("User", BehaviourKind::SwitchAuth, BehaviourKind::SwitchAuth),
        ("Manager", BehaviourKind::SwitchAuth, BehaviourKind::CheckString),
        ("Admin", BehaviourKind::CheckString, BehaviourKind::CheckString),
    ];

    for (tag, retail_kind, enterprise_kind) in cases {
        assert_eq!(retail.create_client(tag, "x").unwrap().kind(), retail_kind, "retail {tag}");
        assert_eq!(
            enterprise.create_client(tag, "x").unwrap().kind(),
            enterprise_kind,
            "enterprise {tag}"
        );
    }
}

#[test]
fn test_check_string_grants_only_admins() {
    let enterprise = EnterpriseClientHandler::new();

    assert!(enterprise.create_client("Admin", "x").unwrap().handle_access());
    assert!(!enterprise.create_client("Manager", "x").unwrap().handle_access());
}

#[test]
fn test_switch_auth_twice_returns_to_start() {
    let retail = RetailClientHandler::new();

    for tag in ["User", "Manager"] {
        let mut access = retail.create_client(tag, "x").unwrap();
        let original = access.client().has_access();

        assert_eq!(access.handle_access(), !original);
        assert_eq!(access.handle_access(), original);
        assert_eq!(access.client().has_access(), original);
    }
}

#[test]
fn test_unknown_tag_is_absent_everywhere() {
    assert!(ClientFactory::new().create_client("Unknown", "x").is_none());
    assert!(RetailClientHandler::new().create_client("Unknown", "x").is_none());
    assert!(EnterpriseClientHandler::new().create_client("Unknown", "x").is_none());
}

#[test]
fn test_into_client_hands_back_mutated_state() {
    let mut access = Channel::Retail.handler().create_client("User", "alice").unwrap();
    assert!(access.handle_access());

    let client = access.into_client();
    assert_eq!(client.name(), "alice");
    assert!(client.has_access());
}

/// Full roster run through the enterprise channel.
#[test]
fn test_access_system_runs_roster() {
    let config = AccessConfig {
        channel: Channel::Enterprise,
        clients: vec![
            ClientSpec::new("User", "alice"),
            ClientSpec::new("Manager", "bob"),
            ClientSpec::new("Admin", "carol"),
            ClientSpec::new("Guest", "dave"),
        ],
    };
    let system = AccessSystem::new(&config);
    assert_eq!(system.handler().channel(), Channel::Enterprise);

    let outcomes = system.run();
    assert_eq!(
        outcomes,
        vec![
            AccessOutcome {
                client_type: "User".to_string(),
                name: Some("alice".to_string()),
                behaviour: Some(BehaviourKind::SwitchAuth),
                granted: Some(true),
            },
            AccessOutcome {
                client_type: "Manager".to_string(),
                name: Some("bobMAN".to_string()),
                behaviour: Some(BehaviourKind::CheckString),
                granted: Some(false),
            },
            AccessOutcome {
                client_type: "Admin".to_string(),
                name: Some("carolADMIN".to_string()),
                behaviour: Some(BehaviourKind::CheckString),
                granted: Some(true),
            },
            AccessOutcome {
                client_type: "Guest".to_string(),
                name: None,
                behaviour: None,
                granted: None,
            },
        ]
    );
}

#[test]
fn test_access_system_defaults_to_demo_roster() {
    let system = AccessSystem::new(&AccessConfig::default());
    let outcomes = system.run();

    assert_eq!(outcomes.len(), ClientSpec::demo_roster().len());
    // Retail manager toggles from true to false.
    assert_eq!(outcomes[1].behaviour, Some(BehaviourKind::SwitchAuth));
    assert_eq!(outcomes[1].granted, Some(false));
    assert!(outcomes[3].behaviour.is_none());
}

/// Rebuilding a released client's auth string appends the suffix a second time.
#[test]
fn test_released_manager_rebuild_appends_suffix() {
    let access = RetailClientHandler::new().create_client("Manager", "bob").unwrap();
    let mut client = access.into_client();
    assert_eq!(client.auth_string(), "bobMAN");

    client.build_auth_string();
    assert_eq!(client.name(), "bobMANMAN");
    assert_eq!(client.auth_string(), "bobMANMAN");
}
