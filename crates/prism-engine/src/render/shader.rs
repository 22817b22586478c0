//! WGSL loading with diagnostics.
//!
//! Compilation itself is naga's job inside wgpu. This only forwards whatever
//! the compiler reports to the log, tagged with the module label, and keeps
//! going.

use log::Level;

/// Creates a shader module from WGSL source and logs its compilation
/// messages.
pub fn load_wgsl(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    report(label, &info.messages);
    module
}

/// Logs compiler messages. Returns the number of errors.
pub fn report(label: &str, messages: &[wgpu::CompilationMessage]) -> usize {
    let mut errors = 0;
    for msg in messages {
        let level = level_for(&msg.message_type);
        if level == Level::Error {
            errors += 1;
        }
        match &msg.location {
            Some(loc) => log::log!(
                level,
                "shader `{label}` {}:{}: {}",
                loc.line_number,
                loc.line_position,
                msg.message
            ),
            None => log::log!(level, "shader `{label}`: {}", msg.message),
        }
    }

    if errors == 0 {
        log::debug!("shader `{label}` compiled");
    }
    errors
}

fn level_for(ty: &wgpu::CompilationMessageType) -> Level {
    match ty {
        wgpu::CompilationMessageType::Error => Level::Error,
        wgpu::CompilationMessageType::Warning => Level::Warn,
        wgpu::CompilationMessageType::Info => Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(message_type: wgpu::CompilationMessageType) -> wgpu::CompilationMessage {
        wgpu::CompilationMessage {
            message: "unexpected token".to_string(),
            message_type,
            location: None,
        }
    }

    #[test]
    fn message_types_map_to_log_levels() {
        assert_eq!(level_for(&wgpu::CompilationMessageType::Error), Level::Error);
        assert_eq!(level_for(&wgpu::CompilationMessageType::Warning), Level::Warn);
        assert_eq!(level_for(&wgpu::CompilationMessageType::Info), Level::Info);
    }

    #[test]
    fn report_counts_only_errors() {
        let messages = [
            message(wgpu::CompilationMessageType::Warning),
            message(wgpu::CompilationMessageType::Error),
            message(wgpu::CompilationMessageType::Info),
            message(wgpu::CompilationMessageType::Error),
        ];
        assert_eq!(report("test", &messages), 2);
        assert_eq!(report("test", &[]), 0);
    }
}
