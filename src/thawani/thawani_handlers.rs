// thawani_handlers.rs
use super::thawani_client::ThawaniClient;
use super::thawani_error::ThawaniError;
use super::thawani_models::ListParams;
use actix_web::{delete, get, post, web, HttpResponse};
use serde::Serialize;
use serde_json::Value;

type HandlerResult = Result<HttpResponse, ThawaniError>;

#[derive(Serialize)]
struct PaymentIntentCreated {
    payment_intent_id: String,
}

#[derive(Serialize)]
struct CheckoutUrl {
    session_id: String,
    redirect_url: String,
}

/// Mounts the Thawani routes under `/api/thawani`.
///
/// The routes carry no authentication and call Thawani with the secret key,
/// so mount them behind the host app's own auth (see the crate docs).
/// The host app must register a `web::Data<ThawaniClient>`:
///
/// ```no_run
/// use actix_web::{web, App};
/// use tiny_thawani::thawani::{self, ThawaniClient};
///
/// # fn build(client: ThawaniClient) {
/// let app = App::new()
///     .app_data(web::Data::new(client))
///     .configure(thawani::configure);
/// # }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/thawani")
            .service(create_checkout_session)
            .service(list_checkout_sessions)
            .service(retrieve_checkout_session)
            .service(cancel_checkout_session)
            .service(checkout_url)
            .service(create_customer)
            .service(retrieve_customer)
            .service(delete_customer)
            .service(customer_payment_methods)
            .service(delete_payment_method)
            .service(create_payment_intent)
            .service(retrieve_payment_intent)
            .service(confirm_payment_intent)
            .service(cancel_payment_intent),
    );
}

/// Creates a checkout session from the JSON body and answers with
/// `{ session_id, redirect_url }`.
#[post("/checkout/session")]
pub async fn create_checkout_session(
    body: web::Json<Value>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let session = client.create_checkout_session(&body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[get("/checkout/session")]
pub async fn list_checkout_sessions(
    params: web::Query<ListParams>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let sessions = client.list_checkout_sessions(params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[get("/checkout/session/{session_id}")]
pub async fn retrieve_checkout_session(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let session = client.retrieve_checkout_session(&path).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/checkout/session/{session_id}/cancel")]
pub async fn cancel_checkout_session(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let session = client.cancel_checkout_session(&path).await?;
    Ok(HttpResponse::Ok().json(session))
}

/// Payment page URL for an existing session. Does not call Thawani.
#[get("/checkout/url/{session_id}")]
pub async fn checkout_url(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let session_id = path.into_inner();
    let redirect_url = client.checkout_url(&session_id)?;
    Ok(HttpResponse::Ok().json(CheckoutUrl {
        session_id,
        redirect_url,
    }))
}

#[post("/customers")]
pub async fn create_customer(
    body: web::Json<Value>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let customer = client.create_customer(&body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[get("/customers/{customer_id}")]
pub async fn retrieve_customer(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let customer = client.retrieve_customer(&path).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let result = client.delete_customer(&path).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/customers/{customer_id}/payment_methods")]
pub async fn customer_payment_methods(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let methods = client.customer_payment_methods(&path).await?;
    Ok(HttpResponse::Ok().json(methods))
}

#[delete("/payment_methods/{card_id}")]
pub async fn delete_payment_method(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let result = client.delete_payment_method(&path).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/payment_intents")]
pub async fn create_payment_intent(
    body: web::Json<Value>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let payment_intent_id = client.create_payment_intent(&body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PaymentIntentCreated { payment_intent_id }))
}

#[get("/payment_intents/{payment_intent_id}")]
pub async fn retrieve_payment_intent(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let intent = client.retrieve_payment_intent(&path).await?;
    Ok(HttpResponse::Ok().json(intent))
}

/// Confirms the intent and answers with `{ payment_id, redirect_url }`.
#[post("/payment_intents/{payment_intent_id}/confirm")]
pub async fn confirm_payment_intent(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let confirmed = client.confirm_payment_intent(&path).await?;
    Ok(HttpResponse::Ok().json(confirmed))
}

#[post("/payment_intents/{payment_intent_id}/cancel")]
pub async fn cancel_payment_intent(
    path: web::Path<String>,
    client: web::Data<ThawaniClient>,
) -> HandlerResult {
    let intent = client.cancel_payment_intent(&path).await?;
    Ok(HttpResponse::Ok().json(intent))
}
