//! Integration tests for `RobinhoodClient` against a local mock server.
//!
//! Each test starts its own `httpmock` server and points the client's base
//! URL at it, so the full login → headers → resource call path is exercised.

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

use robinhood_sdk::prelude::*;

const TOKEN: &str = "tok456";
const ACCOUNT: &str = "acc123";
const AAPL_URL: &str = "https://api.robinhood.com/instruments/450dfc6d/";

fn builder(server: &MockServer) -> RobinhoodClientBuilder {
    RobinhoodClient::builder()
        .base_url(&server.base_url())
        .login("alice", "hunter2")
}

async fn mock_login<'a>(server: &'a MockServer, body: serde_json::Value) -> httpmock::Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api-token-auth/")
                .body_contains("username=alice")
                .body_contains("password=hunter2");
            then.status(200).json_body(body);
        })
        .await
}

async fn ready_client(server: &MockServer) -> RobinhoodClient {
    mock_login(server, json!({"account": ACCOUNT, "token": TOKEN})).await;
    builder(server).connect().await.unwrap()
}

fn aapl_order() -> OrderOptions {
    OrderOptions::new(
        InstrumentRef::new(AAPL_URL, "AAPL"),
        Decimal::new(15025, 2),
        Decimal::from(2),
    )
}

// =============================================================================
// Session lifecycle
// =============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn test_login_then_accounts_carries_token() {
        let server = MockServer::start_async().await;
        let login = mock_login(&server, json!({"account": ACCOUNT, "token": TOKEN})).await;
        let accounts = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/accounts/")
                    .header("authorization", "Token tok456")
                    .header("x-robinhood-api-version", "1.0.0");
                then.status(200)
                    .json_body(json!({"results": [{"account_number": "5PY78241"}]}));
            })
            .await;

        let client = builder(&server).connect().await.unwrap();
        assert_eq!(client.state().await, SessionState::Ready);
        assert_eq!(client.account().await.as_deref(), Some(ACCOUNT));

        let body = client.accounts().list().await.unwrap();
        assert_eq!(body["results"][0]["account_number"], "5PY78241");

        login.assert_async().await;
        accounts.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_request_is_form_encoded_without_token() {
        let server = MockServer::start_async().await;
        let login = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api-token-auth/")
                    .header(
                        "content-type",
                        "application/x-www-form-urlencoded; charset=utf-8",
                    )
                    .body("password=hunter2&username=alice");
                then.status(200).json_body(json!({"token": TOKEN}));
            })
            .await;

        let client = builder(&server).build().unwrap();
        client.auth().login().await.unwrap();

        assert!(client.is_ready().await);
        assert!(client.account().await.is_none());
        login.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_client_not_ready() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api-token-auth/");
                then.status(400).json_body(json!({
                    "non_field_errors": ["Unable to log in with provided credentials."]
                }));
            })
            .await;
        let accounts = server
            .mock_async(|when, then| {
                when.method(GET).path("/accounts/");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = builder(&server).build().unwrap();
        let err = client.auth().login().await.unwrap_err();
        assert!(
            matches!(err, SdkError::Auth(AuthError::LoginFailed(ref m)) if m.contains("Unable to log in")),
            "unexpected error: {err:?}"
        );

        assert_eq!(client.state().await, SessionState::Uninitialized);
        assert!(matches!(
            client.accounts().list().await,
            Err(SdkError::Auth(AuthError::NotReady))
        ));
        accounts.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_connect_fails_on_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api-token-auth/");
                then.status(401).body("bad credentials");
            })
            .await;

        let result = builder(&server).connect().await;
        assert!(matches!(
            result,
            Err(SdkError::Auth(AuthError::LoginFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let server = MockServer::start_async().await;
        mock_login(&server, json!({"detail": "mfa_required"})).await;

        let client = builder(&server).build().unwrap();
        let err = client.auth().login().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::LoginFailed(_))));
        assert!(!client.is_ready().await);
    }

    #[tokio::test]
    async fn test_non_json_login_body_fails_login() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api-token-auth/");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<html>captcha</html>");
            })
            .await;

        let client = builder(&server).build().unwrap();
        let err = client.auth().login().await.unwrap_err();
        assert!(
            matches!(err, SdkError::Auth(AuthError::LoginFailed(_))),
            "unexpected error: {err:?}"
        );
        assert_eq!(client.state().await, SessionState::Uninitialized);
    }

    #[tokio::test]
    async fn test_empty_token_fails_login() {
        let server = MockServer::start_async().await;
        mock_login(&server, json!({"account": ACCOUNT, "token": ""})).await;

        let client = builder(&server).build().unwrap();
        let err = client.auth().login().await.unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::LoginFailed(_))));
        assert!(!client.is_ready().await);
    }

    #[tokio::test]
    async fn test_login_transport_failure_passes_through() {
        let result = RobinhoodClient::builder()
            .base_url("http://127.0.0.1:1")
            .login("alice", "hunter2")
            .connect()
            .await;
        assert!(matches!(
            result,
            Err(SdkError::Http(HttpError::Reqwest(_)))
        ));
    }

    #[tokio::test]
    async fn test_relogin_uses_latest_token() {
        let server = MockServer::start_async().await;
        let first = mock_login(&server, json!({"account": ACCOUNT, "token": "first"})).await;
        let client = builder(&server).connect().await.unwrap();
        first.delete_async().await;

        mock_login(&server, json!({"account": ACCOUNT, "token": "second"})).await;
        client.auth().login().await.unwrap();

        let user = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user/")
                    .header("authorization", "Token second");
                then.status(200).json_body(json!({"username": "alice"}));
            })
            .await;

        let body = client.user().profile().await.unwrap();
        assert_eq!(body["username"], "alice");
        user.assert_async().await;
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let server = MockServer::start_async().await;
        mock_login(&server, json!({"account": ACCOUNT, "token": TOKEN})).await;

        let client = builder(&server).build().unwrap();
        let clone = client.clone();
        client.auth().login().await.unwrap();

        assert!(clone.is_ready().await);
    }
}

// =============================================================================
// Readiness gate
// =============================================================================

mod readiness {
    use super::*;

    #[tokio::test]
    async fn test_every_call_rejected_before_login() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = builder(&server).build().unwrap();

        let results = vec![
            client.accounts().list().await,
            client.accounts().dividends().await,
            client.user().profile().await,
            client.user().investment_profile().await,
            client.market().instruments("aapl").await,
            client.market().quote_data("AAPL").await,
            client.orders().list().await,
            client.orders().place_buy_order(&aapl_order()).await,
            client.orders().place_sell_order(&aapl_order()).await,
        ];

        for result in results {
            assert!(matches!(result, Err(SdkError::Auth(AuthError::NotReady))));
        }
        any.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_calls_during_login_are_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api-token-auth/");
                then.status(200)
                    .delay(Duration::from_millis(800))
                    .json_body(json!({"account": ACCOUNT, "token": TOKEN}));
            })
            .await;
        let accounts = server
            .mock_async(|when, then| {
                when.method(GET).path("/accounts/");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = builder(&server).build().unwrap();

        let during_login = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let state = tokio::time::timeout(Duration::from_millis(50), client.state()).await;
            let list = client.accounts().list().await;
            (state, list)
        };
        let auth = client.auth();
        let (login, (state, list)) = tokio::join!(auth.login(), during_login);

        assert_eq!(state.ok(), Some(SessionState::Uninitialized));
        assert!(matches!(list, Err(SdkError::Auth(AuthError::NotReady))));
        accounts.assert_hits_async(0).await;

        login.unwrap();
        assert!(client.is_ready().await);
    }
}

// =============================================================================
// Request facade
// =============================================================================

mod facade {
    use super::*;

    #[tokio::test]
    async fn test_instrument_search_uppercases_symbol() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/instruments/")
                    .query_param("query", "AAPL")
                    .header("authorization", "Token tok456");
                then.status(200).json_body(json!({
                    "results": [{"url": AAPL_URL, "symbol": "AAPL", "name": "Apple Inc."}]
                }));
            })
            .await;

        for input in ["aapl", "AaPl", "AAPL"] {
            let body = client.market().instruments(input).await.unwrap();
            let instrument: InstrumentRef =
                serde_json::from_value(body["results"][0].clone()).unwrap();
            assert_eq!(instrument, InstrumentRef::new(AAPL_URL, "AAPL"));
        }
        search.assert_hits_async(3).await;
    }

    #[tokio::test]
    async fn test_quote_data_sends_symbols_verbatim() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let quotes = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/quotes/")
                    .query_param("symbols", "AAPL,msft");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        client.market().quote_data("AAPL,msft").await.unwrap();
        quotes.assert_async().await;
    }

    #[tokio::test]
    async fn test_blank_symbol_rejected_without_request() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET).path("/instruments/");
                then.status(200).json_body(json!({}));
            })
            .await;

        let result = client.market().instruments("  ").await;
        assert!(matches!(result, Err(SdkError::Validation(_))));
        search.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_read_endpoints_hit_their_paths() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;

        let paths = [
            "/user/investment_profile/",
            "/user/",
            "/dividends/",
            "/orders/",
            "/markets/",
            "/watchlists/",
            "/notifications/",
            "/applications/",
            "/documents/",
            "/ach/relationships/",
            "/ach/transfers/",
        ];
        let mut mocks = Vec::new();
        for path in paths {
            mocks.push(
                server
                    .mock_async(|when, then| {
                        when.method(GET)
                            .path(path)
                            .header("authorization", "Token tok456");
                        then.status(200).json_body(json!({ "path": path }));
                    })
                    .await,
            );
        }

        let bodies = vec![
            client.user().investment_profile().await.unwrap(),
            client.user().profile().await.unwrap(),
            client.accounts().dividends().await.unwrap(),
            client.orders().list().await.unwrap(),
            client.market().markets().await.unwrap(),
            client.market().watchlists().await.unwrap(),
            client.user().notifications().await.unwrap(),
            client.user().applications().await.unwrap(),
            client.accounts().documents().await.unwrap(),
            client.accounts().ach_relationships().await.unwrap(),
            client.accounts().ach_transfers().await.unwrap(),
        ];

        for (body, path) in bodies.iter().zip(paths) {
            assert_eq!(body["path"], path);
        }
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_fetch_any_endpoint() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let margin = server
            .mock_async(|when, then| {
                when.method(GET).path("/margin/upgrades/");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let endpoint: Endpoint = "margin_upgrade".parse().unwrap();
        client.fetch(endpoint).await.unwrap();
        margin.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_errors_pass_through() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dividends/");
                then.status(500).body("upstream exploded");
            })
            .await;

        let err = client.accounts().dividends().await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Http(HttpError::ServerError { status: 500, ref body }) if body == "upstream exploded"
        ));
    }

    #[tokio::test]
    async fn test_expired_token_surfaces_as_unauthorized() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/accounts/");
                then.status(401)
                    .json_body(json!({"detail": "Invalid token."}));
            })
            .await;

        let err = client.accounts().list().await.unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Unauthorized(_))));
    }
}

// =============================================================================
// Order placement
// =============================================================================

mod orders {
    use super::*;

    const COMMON_FIELDS: &str = "&price=150.25&quantity=2";

    #[tokio::test]
    async fn test_buy_and_sell_differ_only_in_side() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;

        let mut mocks = Vec::new();
        for side in ["buy", "sell"] {
            let expected = format!(
                "account={}&instrument={}{}&side={}&symbol=AAPL\
                 &time_in_force=gfd&trigger=immediate&type=market",
                ACCOUNT,
                urlencoding::encode(AAPL_URL),
                COMMON_FIELDS,
                side
            );
            mocks.push(
                server
                    .mock_async(|when, then| {
                        when.method(POST)
                            .path("/orders/")
                            .header("authorization", "Token tok456")
                            .body(expected);
                        then.status(201)
                            .json_body(json!({"id": format!("order-{}", side), "side": side}));
                    })
                    .await,
            );
        }

        let buy = client.orders().place_buy_order(&aapl_order()).await.unwrap();
        let sell = client.orders().place_sell_order(&aapl_order()).await.unwrap();

        assert_eq!(buy["id"], "order-buy");
        assert_eq!(sell["id"], "order-sell");
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_overrides_reach_the_wire() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let order = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/orders/")
                    .body_contains("side=sell")
                    .body_contains("time_in_force=gtc&trigger=stop&type=limit");
                then.status(201).json_body(json!({"state": "queued"}));
            })
            .await;

        let options = aapl_order()
            .with_time_in_force(TimeInForce::Gtc)
            .with_trigger(Trigger::Stop)
            .with_order_type(OrderType::Limit);
        let body = client.orders().place_sell_order(&options).await.unwrap();

        assert_eq!(body["state"], "queued");
        order.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_instrument_rejected_before_request() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        let order = server
            .mock_async(|when, then| {
                when.method(POST).path("/orders/");
                then.status(201).json_body(json!({}));
            })
            .await;

        let options = OrderOptions::new(
            InstrumentRef::new("", "AAPL"),
            Decimal::new(15025, 2),
            Decimal::ONE,
        );
        let err = client.orders().place_buy_order(&options).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
        order.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_order_without_account_rejected() {
        let server = MockServer::start_async().await;
        mock_login(&server, json!({"token": TOKEN})).await;
        let client = builder(&server).connect().await.unwrap();
        let order = server
            .mock_async(|when, then| {
                when.method(POST).path("/orders/");
                then.status(201).json_body(json!({}));
            })
            .await;

        let err = client.orders().place_buy_order(&aapl_order()).await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref m) if m.contains("account")));
        order.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_rejected_order_passes_through() {
        let server = MockServer::start_async().await;
        let client = ready_client(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/orders/");
                then.status(400)
                    .json_body(json!({"non_field_errors": ["Not enough buying power."]}));
            })
            .await;

        let err = client.orders().place_buy_order(&aapl_order()).await.unwrap_err();
        assert!(matches!(
            err,
            SdkError::Http(HttpError::BadRequest { status: 400, ref body }) if body.contains("buying power")
        ));
    }

    #[tokio::test]
    async fn test_order_account_and_token_come_from_same_login() {
        let server = MockServer::start_async().await;
        let first = mock_login(&server, json!({"account": "acc-old", "token": "old"})).await;
        let client = builder(&server).connect().await.unwrap();
        first.delete_async().await;
        mock_login(&server, json!({"account": "acc-new", "token": "new"})).await;

        let mismatched = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/orders/")
                    .header("authorization", "Token new")
                    .body_contains("account=acc-old");
                then.status(201).json_body(json!({}));
            })
            .await;
        let order = server
            .mock_async(|when, then| {
                when.method(POST).path("/orders/");
                then.status(201).json_body(json!({"id": "o1"}));
            })
            .await;

        let auth = client.auth();
        let orders = client.orders();
        let buy = aapl_order();
        let (relogin, placed) = tokio::join!(auth.login(), orders.place_buy_order(&buy));
        relogin.unwrap();
        placed.unwrap();

        mismatched.assert_hits_async(0).await;
        order.assert_hits_async(1).await;
    }
}
