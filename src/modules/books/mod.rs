pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookstore_kernel::{settings::BooksSettings, InitCtx, Module};
use serde_json::json;

use store::BookStore;

/// Books module: owns the catalogue and exposes it over HTTP
pub struct BooksModule {
    store: Arc<BookStore>,
}

impl BooksModule {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// Shared handle to the catalogue
    pub fn store(&self) -> Arc<BookStore> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = self.store.len(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::api_router(self.store())
    }

    fn root_routes(&self) -> Router {
        routes::root_router(self.store())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let not_found = json!({
            "description": "Book not found",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });
        let unprocessable = json!({
            "description": "Validation error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });
        let book_response = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/Book" }
                    }
                }
            })
        };
        let book_id_param = json!({
            "name": "book_id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "int64" }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All books in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        },
                        "responses": {
                            "201": book_response("Created book"),
                            "422": unprocessable.clone()
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                },
                "/{book_id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [book_id_param.clone()],
                        "responses": {
                            "200": book_response("Requested book"),
                            "404": not_found.clone(),
                            "422": unprocessable.clone()
                        }
                    },
                    "patch": {
                        "summary": "Update a book",
                        "description": "Writes title, publisher, page_count and language. The author field is accepted but not applied.",
                        "tags": ["Books"],
                        "parameters": [book_id_param.clone()],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookUpdate" }
                                }
                            }
                        },
                        "responses": {
                            "200": book_response("Updated book"),
                            "404": not_found.clone(),
                            "422": unprocessable.clone()
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [book_id_param],
                        "responses": {
                            "204": { "description": "Book deleted" },
                            "404": not_found,
                            "422": unprocessable
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Client-assigned identifier"
                            },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publisher": { "type": "string" },
                            "published_date": {
                                "type": "string",
                                "description": "Free-form publication date"
                            },
                            "page_count": { "type": "integer", "format": "int64" },
                            "language": { "type": "string" }
                        },
                        "required": [
                            "id", "title", "author", "publisher",
                            "published_date", "page_count", "language"
                        ]
                    },
                    "BookUpdate": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "publisher": { "type": "string" },
                            "page_count": { "type": "integer", "format": "int64" },
                            "language": { "type": "string" }
                        },
                        "required": ["title", "author", "publisher", "page_count", "language"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            books = self.store.len(),
            "books module stopped"
        );
        Ok(())
    }
}

/// Create the books module, seeding the catalogue when configured to
pub fn create_module(settings: &BooksSettings) -> Arc<BooksModule> {
    let store = if settings.seed_catalog {
        BookStore::seeded()
    } else {
        BookStore::new()
    };
    Arc::new(BooksModule::new(Arc::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_follows_settings() {
        let seeded = create_module(&BooksSettings { seed_catalog: true });
        assert_eq!(seeded.store().len(), 6);

        let empty = create_module(&BooksSettings {
            seed_catalog: false,
        });
        assert!(empty.store().is_empty());
    }

    #[test]
    fn openapi_fragment_declares_book_schemas() {
        let fragment = create_module(&BooksSettings::default()).openapi().unwrap();
        let schemas = &fragment["components"]["schemas"];
        assert_eq!(schemas["Book"]["required"].as_array().unwrap().len(), 7);
        assert!(schemas["BookUpdate"]["properties"]
            .get("published_date")
            .is_none());
        assert!(fragment["paths"]["/{book_id}"].get("patch").is_some());
    }
}
