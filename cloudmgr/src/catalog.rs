//! Fixed records the console displays: gauges, agents, machine series, regions, cards.

use crate::types::{Agent, AgentStatus, Co2, Gauge, MachineConfig, Region, ServiceCard};

pub fn initial_gauges() -> Vec<Gauge> {
    vec![
        Gauge::new("cpu", "CPU Usage", "%", 45.0),
        Gauge::new("memory", "Memory", "%", 67.0),
        Gauge::new("disk", "Disk I/O", "%", 23.0),
        Gauge::new("network", "Network", "%", 89.0),
    ]
}

pub static AGENTS: [Agent; 5] = [
    Agent { id: "1", name: "Security Agent", status: AgentStatus::Online, last_seen: "2 min ago" },
    Agent { id: "2", name: "Monitor Agent", status: AgentStatus::Online, last_seen: "1 min ago" },
    Agent { id: "3", name: "Backup Agent", status: AgentStatus::Busy, last_seen: "5 min ago" },
    Agent { id: "4", name: "Update Agent", status: AgentStatus::Offline, last_seen: "1 hour ago" },
    Agent { id: "5", name: "Analytics Agent", status: AgentStatus::Online, last_seen: "Just now" },
];

pub static MACHINE_CONFIGS: [MachineConfig; 6] = [
    MachineConfig { id: 1, series: "C3D", vcpus: "4 - 360", memory: "8 - 2,880 GB", description: "Consistently high performance", score: 0 },
    MachineConfig { id: 2, series: "N2D", vcpus: "2 - 224", memory: "2 - 896 GB", description: "Balanced price & performance", score: 2 },
    MachineConfig { id: 3, series: "E2", vcpus: "0.25 - 32", memory: "1 - 128 GB", description: "Low cost, day-to-day computing", score: 5 },
    MachineConfig { id: 4, series: "C4A", vcpus: "1 - 72", memory: "2 - 576 GB", description: "Arm-based consistently high performance", score: 1 },
    MachineConfig { id: 5, series: "N4", vcpus: "2 - 80", memory: "4 - 640 GB", description: "Flexible & cost-optimized", score: 2 },
    MachineConfig { id: 6, series: "T2D", vcpus: "1 - 60", memory: "4 - 240 GB", description: "Scale-out workloads", score: 5 },
];

pub static REGIONS: [Region; 6] = [
    Region { id: "us-east1", location: "South Carolina", co2: Some(Co2::High) },
    Region { id: "europe-north1", location: "Finland", co2: Some(Co2::Low) },
    Region { id: "asia-northeast1", location: "Tokyo", co2: None },
    Region { id: "us-west1", location: "Oregon", co2: Some(Co2::Low) },
    Region { id: "australia-southeast1", location: "Sydney", co2: Some(Co2::High) },
    Region { id: "europe-west1", location: "Belgium", co2: None },
];

pub static ZONES: [&str; 3] = ["1-a", "1-b", "1-c"];

pub static SERVICE_CARDS: [ServiceCard; 6] = [
    ServiceCard { id: "vm", title: "Create a VM", description: "Launch virtual machines with custom configurations", enabled: true },
    ServiceCard { id: "database", title: "Database Services", description: "Managed database solutions", enabled: false },
    ServiceCard { id: "kubernetes", title: "Kubernetes", description: "Container orchestration platform", enabled: false },
    ServiceCard { id: "compute", title: "Compute Engine", description: "Scalable computing resources", enabled: false },
    ServiceCard { id: "api", title: "API & Services", description: "Application programming interfaces", enabled: false },
    ServiceCard { id: "security", title: "Security Center", description: "Cloud security management", enabled: false },
];

/// Static "Active Services" badges on the control center.
pub static ACTIVE_SERVICES: [(&str, &str); 4] = [
    ("Load Balancer", "Active"),
    ("Database", "Active"),
    ("Cache Service", "Scaling"),
    ("CDN", "Active"),
];

/// Static "Security Status" badges on the control center.
pub static SECURITY_STATUS: [(&str, &str); 4] = [
    ("Firewall", "Protected"),
    ("SSL Certificate", "Valid"),
    ("Intrusion Detection", "Monitoring"),
    ("Access Control", "Enforced"),
];

pub fn machine_config(id: u32) -> Option<&'static MachineConfig> {
    MACHINE_CONFIGS.iter().find(|c| c.id == id)
}
