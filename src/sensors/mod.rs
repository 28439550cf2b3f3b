//! Sensor subsystem — the CPU temperature source.

pub mod cpu_temp;

pub use cpu_temp::CpuTempSensor;
