// Domain rules - Naming and command policies

use crate::domain::errors::*;
use crate::domain::model::*;

/// Rules for naming input and output files
pub struct NamingRules;

impl NamingRules {
    /// Output name for a chooser selection: `{name}_{millis}.mp4`
    pub fn chooser_output_name(name: &str, now_millis: i64) -> String {
        format!("{}_{}.mp4", name, now_millis)
    }

    /// Output name for a gallery selection: `{millis}.mp4`
    pub fn gallery_output_name(now_millis: i64) -> String {
        format!("{}.mp4", now_millis)
    }

    /// Stable replacement name for a transient gallery file: `{millis}.{ext}`
    pub fn stable_name(original_name: &str, now_millis: i64) -> Result<String, DomainError> {
        let extension = Self::extension(original_name).ok_or_else(|| {
            DomainError::BadArgs(format!("Gallery file has no extension: {}", original_name))
        })?;
        Ok(format!("{}.{}", now_millis, extension))
    }

    /// Extension of a bare file name, without the dot
    pub fn extension(file_name: &str) -> Option<&str> {
        let (_, extension) = file_name.rsplit_once('.')?;
        if extension.is_empty() {
            None
        } else {
            Some(extension)
        }
    }

    /// File name carried by a raw gallery path.
    ///
    /// On Android the picker appends a query string, so the name ends at the last `?`.
    pub fn gallery_file_name(raw_path: &str, platform: Platform) -> Result<String, DomainError> {
        let start = raw_path.rfind('/').map(|i| i + 1).unwrap_or(0);
        let name = match platform {
            Platform::Android => {
                let end = raw_path.rfind('?').filter(|&i| i >= start).unwrap_or(raw_path.len());
                &raw_path[start..end]
            }
            Platform::Ios | Platform::Other => &raw_path[start..],
        };

        if name.is_empty() {
            return Err(DomainError::PickerFail(format!(
                "Picker returned a path without a file name: {}",
                raw_path
            )));
        }
        Ok(name.to_string())
    }

    /// Whether the platform hands out a transient path that must be renamed
    pub fn requires_rename(platform: Platform) -> bool {
        platform == Platform::Android
    }
}

/// Rules for building the transcoding command
pub struct EncodeRules;

impl EncodeRules {
    /// Build the re-encode command for the given paths
    pub fn build_encode_command(
        input_file_path: &str,
        output_file_path: &str,
        policy: &EncodePolicy,
    ) -> Result<EncodeCommand, DomainError> {
        if input_file_path.is_empty() || output_file_path.is_empty() {
            return Err(DomainError::BadArgs("Input and output paths are required".to_string()));
        }
        policy.validate()?;

        let mut args = vec![
            "-i".to_string(),
            input_file_path.to_string(),
            "-vcodec".to_string(),
            policy.video_codec.clone(),
            "-preset".to_string(),
            policy.preset.clone(),
            "-vf".to_string(),
            policy.scale_filter(),
        ];
        if policy.fast_start {
            args.push("-movflags".to_string());
            args.push("faststart".to_string());
        }
        args.push(output_file_path.to_string());

        Ok(EncodeCommand { args })
    }
}
