use folio_core::relay::{
    ContactError, ContactRelay, Mailer, MailerError, MailerReply, RelayConfig, RelayOutcome,
    RelayReply, RequestMethod, CORS_HEADERS,
};
use folio_core::OutboundEmail;
use wasm_bindgen::JsValue;
use worker::*;

const DEFAULT_CONTACT_PATH: &str = "/contact";
const UNKNOWN_PROVIDER_BODY: &str = "Unknown error";

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let path = req.path();
    if path.trim_end_matches('/') != contact_path(&env) {
        return with_cors(Response::error("not found", 404)?);
    }
    handle_contact(req, &env).await
}

async fn handle_contact(mut req: Request, env: &Env) -> Result<Response> {
    let method = RequestMethod::parse(req.method().as_ref());
    let relay = ContactRelay::new(relay_config(env), ResendMailer);
    let body = if method == RequestMethod::Post {
        match req.bytes().await {
            Ok(body) => body,
            Err(err) => {
                let result = Err(ContactError::Unexpected(format!("failed to read body: {err}")));
                log_result(&result);
                return reply_response(&RelayReply::from_result(&result));
            }
        }
    } else {
        Vec::new()
    };
    let (result, reply) = relay.respond(&method, &body).await;
    log_result(&result);
    reply_response(&reply)
}

fn lookup(env: &Env, key: &str) -> Option<String> {
    env.secret(key)
        .ok()
        .map(|value| value.to_string())
        .or_else(|| env.var(key).ok().map(|value| value.to_string()))
}

fn relay_config(env: &Env) -> std::result::Result<RelayConfig, folio_core::ConfigError> {
    RelayConfig::from_lookup(|key| lookup(env, key))
}

fn contact_path(env: &Env) -> String {
    let raw = lookup(env, "CONTACT_PATH").unwrap_or_else(|| DEFAULT_CONTACT_PATH.to_string());
    normalize_contact_path(&raw)
}

fn normalize_contact_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_CONTACT_PATH.to_string();
    }
    let mut value = trimmed.to_string();
    if !value.starts_with('/') {
        value.insert(0, '/');
    }
    value
}

fn log_result(result: &std::result::Result<RelayOutcome, ContactError>) {
    match result {
        Ok(RelayOutcome::Delivered) => console_log!("contact: message delivered"),
        Ok(RelayOutcome::SpamAbsorbed) => {
            console_log!("contact: honeypot filled, dropping submission")
        }
        Ok(RelayOutcome::Preflight) => {}
        Err(ContactError::MethodNotAllowed(method)) => {
            console_log!("contact: rejected method {}", method)
        }
        Err(ContactError::Validation(err)) => console_log!("contact: rejected input: {:?}", err),
        Err(ContactError::Configuration(err)) => console_error!("contact: {}", err),
        Err(ContactError::Upstream { status, body }) => {
            console_error!("contact: resend api error status={} body={}", status, body)
        }
        Err(ContactError::Unexpected(detail)) => console_error!("contact: {}", detail),
    }
}

fn with_cors(mut response: Response) -> Result<Response> {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.set(name, value)?;
    }
    Ok(response)
}

fn reply_response(reply: &RelayReply) -> Result<Response> {
    let response = match &reply.body {
        Some(body) => Response::from_json(body)?.with_status(reply.status),
        None => Response::empty()?.with_status(reply.status),
    };
    with_cors(response)
}

/// Sends through the Resend HTTP API with the configured bearer key.
struct ResendMailer;

impl ResendMailer {
    fn build_request(config: &RelayConfig, email: &OutboundEmail) -> Result<Request> {
        let payload =
            serde_json::to_string(email).map_err(|err| Error::RustError(err.to_string()))?;
        let mut headers = Headers::new();
        headers.set("Authorization", &format!("Bearer {}", config.api_key))?;
        headers.set("Content-Type", "application/json")?;
        let mut init = RequestInit::new();
        init.with_method(Method::Post)
            .with_headers(headers)
            .with_body(Some(JsValue::from_str(&payload)));
        Request::new_with_init(&config.endpoint, &init)
    }
}

impl Mailer for ResendMailer {
    async fn send(
        &self,
        config: &RelayConfig,
        email: &OutboundEmail,
    ) -> std::result::Result<MailerReply, MailerError> {
        let request =
            Self::build_request(config, email).map_err(|err| MailerError(err.to_string()))?;
        let mut response = Fetch::Request(request)
            .send()
            .await
            .map_err(|err| MailerError(err.to_string()))?;
        let status = response.status_code();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| UNKNOWN_PROVIDER_BODY.to_string());
        Ok(MailerReply { status, body })
    }
}
