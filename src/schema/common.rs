use poem::{FromRequest, Request, RequestBody};
use poem_openapi::{
    error::{ContentTypeError, ParseRequestPayloadError},
    payload::{Json, Payload},
    registry::{MetaMediaType, MetaRequest, Registry},
    types::{ParseFromJSON, Type},
    ApiExtractor, ApiExtractorType, ExtractParamOptions, Object,
};
use serde::{Deserialize, Serialize};

#[derive(Object, Deserialize, Serialize)]
pub struct BadRequestResponse {
    pub message: String,
    pub details: Vec<String>,
}

#[derive(Object, Deserialize, Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct InternalServerErrorResponse {
    pub message: String,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
}

impl InternalServerErrorResponse {
    /// Logs the failure; `err` is only echoed back when `expose_detail` is set.
    pub fn new(
        location: &str,
        function: &str,
        step: &str,
        err: &str,
        expose_detail: bool,
    ) -> Self {
        tracing::error!("{}.{} failed at {}: {}", location, function, step, err);
        Self {
            message: "internal server error".to_string(),
            details: if expose_detail {
                Some(format!("{} at {}: {}", function, step, err))
            } else {
                None
            },
        }
    }
}

/// JSON request body that may be left out entirely. A request without a body
/// yields `None`; a present body must still be valid JSON for `T`.
pub struct OptionalJson<T>(pub Option<T>);

impl<'a, T: ParseFromJSON + Send> ApiExtractor<'a> for OptionalJson<T> {
    const TYPES: &'static [ApiExtractorType] = &[ApiExtractorType::RequestObject];

    type ParamType = ();
    type ParamRawType = ();

    fn register(registry: &mut Registry) {
        T::register(registry);
    }

    fn request_meta() -> Option<MetaRequest> {
        Some(MetaRequest {
            description: None,
            content: vec![MetaMediaType {
                content_type: <Json<T> as Payload>::CONTENT_TYPE,
                schema: T::schema_ref(),
            }],
            required: false,
        })
    }

    async fn from_request(
        request: &'a Request,
        body: &mut RequestBody,
        _param_opts: ExtractParamOptions<Self::ParamType>,
    ) -> poem::Result<Self> {
        let data = <Vec<u8> as FromRequest<'a>>::from_request(request, body).await?;
        if data.is_empty() {
            return Ok(Self(None));
        }
        match request.content_type() {
            Some(content_type) if <Json<T> as Payload>::check_content_type(content_type) => {}
            Some(content_type) => {
                return Err(ContentTypeError::NotSupported {
                    content_type: content_type.to_string(),
                }
                .into())
            }
            None => return Err(ContentTypeError::ExpectContentType.into()),
        }

        let value = serde_json::from_slice(&data).map_err(|err| ParseRequestPayloadError {
            reason: err.to_string(),
        })?;
        let value = T::parse_from_json(Some(value)).map_err(|err| ParseRequestPayloadError {
            reason: err.into_message(),
        })?;
        Ok(Self(Some(value)))
    }
}
