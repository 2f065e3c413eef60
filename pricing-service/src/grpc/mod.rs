pub mod prediction_service;

pub use prediction_service::PredictionGrpcService;

/// Include generated proto code.
pub mod proto {
    tonic::include_proto!("covoiturage.ia.v1");

    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("ia_descriptor");
}
