//! The descriptive tour attached to every request.

use swapin::rspec::request::Tour;

/// What the profile instantiates.
///
/// Whitespace quirks in the text (trailing spaces, tab-indented command
/// blocks, the missing space in "`epc`node") are deliberate: the portal
/// displays this text exactly as published, so it is kept byte-for-byte.
pub const DESCRIPTION: &str = "
Use this profile to instantiate an experiment using Open Air Interface
to realize an end-to-end LTE mobile network. The profile supports two
variants: (i) a simulated RAN (UE and eNodeB) connected to an EPC, or
(ii) an OTS UE (Nexus 5) connected to an SDR-based eNodeB via a
controlled RF attenuator and connected to an EPC.

The simulated version of the profile uses the following resources:

  * A d430 compute node running the OAI simulated UE and eNodeB ('sim-enb') 
  * A d430 compute node running the OAI EPC (HSS, MME, SPGW) ('epc')

The OTS UE/SDR-based eNodeB version of the profile includes
the following resources:

  * Off-the-shelf Nexus 5 UE running Android 4.4.4 KitKat ('rue1')
  * SDR eNodeB (Intel NUC + USRP B210) running OAI eNodeB ('enb1')
  * A d430 compute node running the OAI EPC (HSS, MME, SPGW) ('epc')
  * A d430 compute node providing out-of-band ADB access to the UE ('adb-tgt')

Startup scripts automatically configure OAI for the specific allocated resources.

For more detailed information:

  * [Getting Started](https://gitlab.flux.utah.edu/powder-profiles/OAI-GENERAL/blob/master/README.md)

";

/// How to use the experiment once it is ready.
pub const INSTRUCTIONS: &str = "
After your experiment swapped in succesfully (i.e., is in the Ready state):

**For the version with simulated UE and eNodeB**

Log onto the `epc` node and run:

    sudo /local/repository/bin/start_oai.pl -r sim

This will start up the EPC services on the `epc`node *and* the
simulated UE/eNodeB on the `sim-enb` node.

Log onto the `sim-enb` to verify the functionality:

	ping -I oip1 8.8.8.8
	
You can also look at the output of the simulated UE/eNodeB process:

	sudo screen -r sim_enb

**For the version with OTS UE and SDR-based eNodeB**

Log onto the `enb1` node and start the eNodeB service:

	sudo /local/repository/bin/enb.start.sh
	
To view the output of the eNodeB:

	sudo screen -r enb


Log onto the `epc` node and start the EPC services:

	sudo /local/repository/bin/start_oai.pl
	
To log onto the UE (`rue1`), first log onto the `adb-tgt` node and start up the adb daemon:

	pnadb -a

Then (still on `adb-tgt`) get an ADB shell on the UE by running:

	adb shell
	
If the UE successfully connected you should be able to ping an address on
the Internet from the ADB shell, e.g.,

	ping 8.8.8.8
	
If the UE did not connect by itself, (i.e., you get a \"Network is unreachable\" error),
you might have to reboot the UE (by executing `adb reboot` from the `adb-tgt` node,
or by executing `reboot` directly in the ADB shell on the UE). And then repeating
the `pnadb -a` and `adb shell` commands to get back on the UE to test.


While OAI is still a system in development and may be unstable, you can usually recover
from any issue by running `start_oai.pl` to restart all the services.

  * [More details](https://gitlab.flux.utah.edu/powder-profiles/OAI-GENERAL/blob/master/README.md)

";

/// Builds the tour attached to every request this profile emits.
pub fn tour() -> Tour {
    Tour::builder()
        .description(DESCRIPTION)
        .instructions(INSTRUCTIONS)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_carries_both_blocks() {
        let tour = tour();
        assert!(tour.description().contains("Open Air Interface"));
        assert!(tour.instructions().contains("pnadb -a"));
    }

    #[test]
    fn tour_text_keeps_published_quirks() {
        let tour = tour();
        assert!(tour.description().starts_with('\n'));
        assert!(tour.description().contains("('sim-enb') \n"));
        assert!(tour.instructions().contains("swapped in succesfully"));
        assert!(tour.instructions().contains("the `epc`node *and*"));
        assert!(tour.instructions().contains("\tping -I oip1 8.8.8.8\n"));
        assert!(tour.instructions().ends_with("README.md)\n\n"));
    }
}
