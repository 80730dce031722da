//! Process-wide read-only configuration for the OAI profile.

/// The fixed URNs, images, and hardware types the profile requests.
///
/// These are lookup data, not state: every value is an associated constant.
#[derive(Clone, Copy, Debug)]
pub struct Globals;

impl Globals {
    /// The shared OAI development dataset.
    pub const OAI_DS: &'static str =
        "urn:publicid:IDN+emulab.net:phantomnet+ltdataset+oai-develop";

    /// The shared dataset used by the simulated variant.
    pub const OAI_SIM_DS: &'static str =
        "urn:publicid:IDN+emulab.net:phantomnet+dataset+PhantomNet:oai";

    /// The Android 4.4.4 image loaded on the OTS UE.
    pub const UE_IMG: &'static str =
        "urn:publicid:IDN+emulab.net+image+PhantomNet:ANDROID444-STD";

    /// The image for the node providing out-of-band ADB access.
    pub const ADB_IMG: &'static str =
        "urn:publicid:IDN+emulab.net+image+PhantomNet:UBUNTU14-64-PNTOOLS";

    /// The image running the OAI EPC (HSS, MME, SPGW).
    pub const OAI_EPC_IMG: &'static str =
        "urn:publicid:IDN+emulab.net+image+PhantomNet:UBUNTU16-64-OAIEPC";

    /// The image running the OAI eNodeB on SDR hardware.
    pub const OAI_ENB_IMG: &'static str =
        "urn:publicid:IDN+emulab.net+image+PhantomNet:OAI-Real-Hardware.enb1";

    /// The image running the simulated OAI UE/eNodeB.
    pub const OAI_SIM_IMG: &'static str =
        "urn:publicid:IDN+emulab.net+image+PhantomNet:UBUNTU14-64-OAI";

    /// The startup script that configures OAI for the allocated resources.
    pub const OAI_CONF_SCRIPT: &'static str =
        "/usr/bin/sudo /local/repository/bin/config_oai.pl";

    /// Where the OAI dataset clone is mounted on each node.
    pub const OAI_MOUNT: &'static str = "/opt/oai";

    /// The hardware type of the SDR eNodeB hosts (Intel NUC + USRP B210).
    pub const NUC_HWTYPE: &'static str = "nuc5300";

    /// The hardware type of the OTS UE.
    pub const UE_HWTYPE: &'static str = "nexus5";

    /// The capability tag mapping radio devices to the attenuator matrix.
    pub const RF_CONTROLLED: &'static str = "rf-controlled";
}
