//! Catalogue integration tests for dex-core.
//!
//! These tests run the HTTP client and cache against a local axum server that
//! serves PokeAPI-shaped fixtures.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use dex_core::models::{LookupKey, SpriteVariant};
use dex_core::{CatalogueCache, CatalogueSource, DexError, HttpCatalogue, Session};
use serde_json::{json, Value};

const SPRITE_BYTES: &[u8] = b"\x89PNG fake image";

#[derive(Clone)]
struct Fixture {
    base: String,
    pokemon_hits: Arc<AtomicUsize>,
}

struct TestServer {
    base: String,
    pokemon_hits: Arc<AtomicUsize>,
}

impl TestServer {
    fn catalogue(&self) -> HttpCatalogue {
        HttpCatalogue::new(&format!("{}/api/v2/pokemon", self.base)).unwrap()
    }

    fn hits(&self) -> usize {
        self.pokemon_hits.load(Ordering::SeqCst)
    }
}

fn bulbasaur(base: &str) -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": format!("{base}/api/v2/type/12/")}},
            {"slot": 2, "type": {"name": "poison", "url": format!("{base}/api/v2/type/4/")}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": format!("{base}/sprites/1.png"),
            "front_shiny": format!("{base}/sprites/shiny-1.png")
        },
        "species": {"name": "bulbasaur", "url": format!("{base}/api/v2/pokemon-species/1/")}
    })
}

fn ivysaur(base: &str) -> Value {
    json!({
        "id": 2,
        "name": "ivysaur",
        "height": 10,
        "weight": 130,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": ""}},
            {"slot": 2, "type": {"name": "poison", "url": ""}}
        ],
        "abilities": [{"ability": {"name": "overgrow", "url": ""}, "slot": 1}],
        "sprites": {"front_default": null, "front_shiny": null},
        "species": {"name": "ivysaur", "url": format!("{base}/api/v2/pokemon-species/2/")}
    })
}

async fn pokemon(State(fixture): State<Fixture>, Path(key): Path<String>) -> Response {
    fixture.pokemon_hits.fetch_add(1, Ordering::SeqCst);
    match key.as_str() {
        "1" | "bulbasaur" => Json(bulbasaur(&fixture.base)).into_response(),
        "2" | "ivysaur" => Json(ivysaur(&fixture.base)).into_response(),
        "broken" => (StatusCode::OK, "{\"id\": ").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn species(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({
            "flavor_text_entries": [
                {"flavor_text": "Une graine", "language": {"name": "fr", "url": ""}},
                {"flavor_text": "A strange seed was\nplanted on its\u{c}back at birth.", "language": {"name": "en", "url": ""}}
            ],
            "genera": [{"genus": "Seed Pokémon", "language": {"name": "en", "url": ""}}]
        }))
        .into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn sprite(Path(file): Path<String>) -> Response {
    match file.as_str() {
        "1.png" => SPRITE_BYTES.into_response(),
        _ => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Starts a fixture server on an ephemeral port.
async fn spawn_server() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let pokemon_hits = Arc::new(AtomicUsize::new(0));

    let fixture = Fixture {
        base: base.clone(),
        pokemon_hits: Arc::clone(&pokemon_hits),
    };
    let app = Router::new()
        .route("/api/v2/pokemon/{key}", get(pokemon))
        .route("/api/v2/pokemon-species/{id}/", get(species))
        .route("/sprites/{file}", get(sprite))
        .with_state(fixture);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer { base, pokemon_hits }
}

// =============================================================================
// HTTP client
// =============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn fetch_by_id_decodes_record() {
        let server = spawn_server().await;

        let record = server.catalogue().creature(&LookupKey::Id(1)).await.unwrap();

        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(record.abilities, vec!["overgrow", "chlorophyll"]);
        assert_eq!(record.height, 7);
        assert_eq!(record.weight, 69);
    }

    #[tokio::test]
    async fn unknown_key_is_status_error() {
        let server = spawn_server().await;

        let result = server
            .catalogue()
            .creature(&LookupKey::Name("nonexistent-xyz".to_string()))
            .await;

        match result {
            Err(DexError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let server = spawn_server().await;

        let result = server
            .catalogue()
            .creature(&LookupKey::Name("broken".to_string()))
            .await;

        assert!(matches!(result, Err(DexError::Json(_))));
    }

    #[tokio::test]
    async fn species_picks_english_text() {
        let server = spawn_server().await;
        let catalogue = server.catalogue();
        let record = catalogue.creature(&LookupKey::Id(1)).await.unwrap();

        let info = catalogue.species(&record.species_url).await.unwrap();

        assert_eq!(
            info.description,
            "A strange seed was planted on its back at birth."
        );
        assert_eq!(info.genus, "Seed Pokémon");
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let catalogue = HttpCatalogue::new(&format!("http://{}/api/v2/pokemon", addr)).unwrap();
        let result = catalogue.creature(&LookupKey::Id(1)).await;

        assert!(matches!(result, Err(DexError::Http(_))));
    }
}

// =============================================================================
// Cache
// =============================================================================

mod cache {
    use super::*;

    #[tokio::test]
    async fn repeated_fetch_hits_network_once() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());

        let first = cache.fetch(&LookupKey::Id(1)).await.unwrap();
        let second = cache.fetch(&LookupKey::Id(1)).await.unwrap();

        assert_eq!(server.hits(), 1);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn name_lookup_populates_id_alias() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());

        cache
            .fetch(&"Bulbasaur".parse::<LookupKey>().unwrap())
            .await
            .unwrap();
        let by_id = cache.fetch(&LookupKey::Id(1)).await.unwrap();

        assert_eq!(server.hits(), 1);
        assert_eq!(by_id.name, "bulbasaur");
    }

    #[tokio::test]
    async fn every_failure_collapses_to_not_found() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());

        for key in ["nonexistent-xyz", "broken"] {
            let key = LookupKey::Name(key.to_string());
            let result = cache.fetch(&key).await;
            assert!(matches!(result, Err(DexError::NotFound(_))));
        }

        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn cached_record_equals_fresh_fetch() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());

        let cached = cache.fetch(&LookupKey::Id(1)).await.unwrap();
        let fresh = server.catalogue().creature(&LookupKey::Id(1)).await.unwrap();

        assert_eq!(*cached, fresh);
    }

    #[tokio::test]
    async fn sprite_download() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());
        let record = cache.fetch(&LookupKey::Id(1)).await.unwrap();

        let bytes = cache.sprite(&record, SpriteVariant::Default).await.unwrap();
        assert_eq!(&bytes[..], SPRITE_BYTES);

        let shiny = cache.sprite(&record, SpriteVariant::Shiny).await;
        assert!(matches!(shiny, Err(DexError::Status { .. })));
    }

    #[tokio::test]
    async fn sprite_missing_for_null_urls() {
        let server = spawn_server().await;
        let mut cache = CatalogueCache::new(server.catalogue());
        let record = cache.fetch(&LookupKey::Id(2)).await.unwrap();

        let result = cache.sprite(&record, SpriteVariant::Default).await;
        assert!(matches!(result, Err(DexError::MissingSprite { .. })));
    }
}

// =============================================================================
// Session
// =============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn browse_forward_and_back() {
        let server = spawn_server().await;
        let mut session = Session::new(server.catalogue());

        session.start().await.unwrap();
        let genus = session
            .view()
            .entry()
            .and_then(|e| e.species.as_ref())
            .map(|s| s.genus.clone());
        assert_eq!(genus.as_deref(), Some("Seed Pokémon"));

        let next = session.next().await.unwrap();
        assert_eq!(next.name, "ivysaur");
        // Species fixture for #2 returns 500; the record stays on screen.
        assert!(session.view().entry().unwrap().species.is_none());

        let back = session.previous().await.unwrap().unwrap();
        assert_eq!(back.name, "bulbasaur");
        assert_eq!(server.hits(), 2);
    }
}
