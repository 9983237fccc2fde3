//! Canned response pools for the simulated assistant.
//!
//! Pools are static constants; the classifier picks one entry per reply.

/// Replies for generic threat analysis questions.
pub(super) const THREAT_RESPONSES: &[&str] = &[
    "THREAT ANALYSIS COMPLETE\n\nThis appears to be a sophisticated multi-stage attack with characteristics of APT group activity. The initial infection vector uses a combination of spear-phishing and exploits targeting CVE-2024-1234 in outdated browser plugins.\n\nKey indicators:\n- PowerShell obfuscation techniques to evade detection\n- Fileless malware persistence using registry modifications\n- Beaconing to known malicious C2 infrastructure\n\nRecommendation: Implement containment procedures according to IR playbook section 3.4 and patch all systems against CVE-2024-1234.",
    "MALWARE CLASSIFICATION: RANSOMWARE\n\nThe indicators you've provided match patterns associated with the BlackCat/ALPHV ransomware family. This is a Ransomware-as-a-Service (RaaS) operation with sophisticated evasion techniques.\n\nBehavioral characteristics:\n- Double extortion tactics (encryption + data exfiltration)\n- Lateral movement leveraging compromised credentials\n- Self-propagation via exploitation of unpatched systems\n\nCritical mitigation steps:\n1. Isolate affected systems immediately\n2. Implement application whitelisting\n3. Restore from verified clean backups\n4. Update detection rules to identify BlackCat IOCs",
    "ATTACK CAMPAIGN IDENTIFIED\n\nThe pattern matches an ongoing campaign targeting critical infrastructure in the energy sector. Attribution analysis suggests nation-state affiliation with moderate confidence.\n\nTechnical details:\n- Initial access via VPN appliance vulnerability (CVE-2023-5678)\n- Deployment of custom backdoor (SHADOWTOOTH)\n- Credential harvesting and privilege escalation\n\nThreat intelligence has been shared with the appropriate ISACs and government agencies. Implement detection and mitigation guidance from US-CERT advisory AA24-086A.",
];

/// Replies for vulnerability and patching questions.
pub(super) const VULNERABILITY_RESPONSES: &[&str] = &[
    "VULNERABILITY ASSESSMENT RESULTS\n\nCVE-2024-1234 (CVSS Score: 9.8 CRITICAL)\nRemote Code Execution vulnerability in Apache Struts\n\nDescription: A critical vulnerability in Apache Struts allows unauthenticated attackers to execute arbitrary code via crafted HTTP requests. This vulnerability is being actively exploited in the wild.\n\nAffected versions: Apache Struts 2.0.0 - 2.5.30\nFixed in: Apache Struts 2.5.31\n\nMitigation recommendations:\n1. Update all Struts instances to version 2.5.31 immediately\n2. Apply WAF rules to block exploitation attempts\n3. Monitor for suspicious HTTP traffic patterns\n\nNOTE: Exploitation attempts for this vulnerability have been observed from the following IPs: 192.0.2.1, 198.51.100.2",
    "SECURITY ADVISORY: ZERO-DAY EXPLOITATION\n\nMicrosoft has released an emergency out-of-band patch for a zero-day vulnerability (CVE-2024-5678) affecting Windows systems. This vulnerability is being actively exploited by threat actors.\n\nTechnical details:\n- Windows kernel privilege escalation vulnerability\n- Allows attackers to elevate privileges to SYSTEM level\n- Exploit requires local access but can be chained with other vulnerabilities\n\nRecommended actions:\n1. Apply Microsoft security update KB5025685 immediately\n2. Enable attack surface reduction rules\n3. Implement least privilege access controls\n4. Monitor for indicators of compromise as outlined in MS Security Advisory 220412",
    "VULNERABILITY INTELLIGENCE UPDATE\n\nMultiple critical vulnerabilities discovered in industrial control systems (ICS) used in manufacturing environments:\n\n1. CVE-2023-9876 - Authentication bypass in Siemens SIMATIC HMI panels\n2. CVE-2024-1122 - Buffer overflow in Rockwell Automation ControlLogix\n3. CVE-2024-3344 - Unauthenticated command injection in Schneider Electric EcoStruxure\n\nThese vulnerabilities could allow attackers to gain unauthorized access to industrial systems, potentially resulting in operational disruption or safety incidents.\n\nRecommendation: Apply vendor patches according to the advisories, implement network segmentation, and increase monitoring of ICS networks for suspicious activity.",
];

/// Replies profiling known threat actors.
pub(super) const THREAT_ACTOR_RESPONSES: &[&str] = &[
    "THREAT ACTOR PROFILE: APT29 (COZY BEAR)\n\nAttribution: Russian Foreign Intelligence Service (SVR)\n\nKnown for sophisticated cyber espionage campaigns targeting government entities, think tanks, and diplomatic organizations. Highly skilled and persistent threat actor with extensive resources.\n\nTactical profile:\n- Long-term intelligence gathering operations\n- Advanced custom malware including SUNBURST and NOBELIUM toolsets\n- Supply chain compromises and trusted relationship exploitation\n- Sophisticated operational security practices\n\nRecent campaigns have focused on diplomatic targets in Europe and North America. Uses legitimate cloud services for command and control to blend with normal traffic patterns.",
    "THREAT GROUP ANALYSIS: LAZARUS GROUP\n\nAttribution: North Korean state-sponsored (DPRK)\n\nPrimary motivation: Financial gain and intelligence collection to bypass international sanctions. Known for cryptocurrency theft, financial system intrusions, and intellectual property theft.\n\nTechnical capabilities:\n- Custom malware families including BLINDINGCAN and HOPLIGHT\n- Sophisticated social engineering operations\n- Bitcoin theft and cryptocurrency exchange targeting\n- Watering hole attacks against specific industries\n\nRecent shift to targeting COVID-19 research organizations and pharmaceutical companies. Employs anti-forensic techniques including timestomping and secure deletion tools to hamper attribution.",
    "EMERGING THREAT ACTOR: BLACKMAMBA\n\nAttribution: Financially motivated cybercriminal group\n\nNewly identified threat group specializing in ransomware operations against high-value targets in financial services and healthcare sectors. Estimated to have extorted over $35 million in the past 6 months.\n\nTechnical indicators:\n- Initial access through compromised VPN credentials and exposed RDP\n- Custom ransomware strain with sophisticated encryption implementation\n- Data exfiltration prior to encryption for double extortion tactics\n- Extensive use of legitimate tools (Living off the Land) for lateral movement\n\nCurrent operations primarily target North American and European organizations. Group communicates with victims through Tor hidden services and demands payment in Monero cryptocurrency.",
];

/// Replies for incident response questions.
pub(super) const INCIDENT_RESPONSES: &[&str] = &[
    "INCIDENT RESPONSE PLAYBOOK: RANSOMWARE ATTACK\n\nContainment procedures:\n1. Isolate affected systems from the network immediately\n2. Disable inbound VPN access and external facing services\n3. Implement network filtering to block C2 communication\n4. Preserve forensic evidence including memory dumps and logs\n\nEradication steps:\n1. Identify and close initial access vector\n2. Scan for persistence mechanisms using EDR/forensic tools\n3. Reset all credentials across the environment\n4. Verify integrity of backup systems\n\nRecovery process:\n1. Restore critical systems from verified clean backups\n2. Implement additional security controls before reconnection\n3. Conduct thorough vulnerability assessment\n4. Monitor for re-infection attempts",
    "SECURITY INCIDENT ANALYSIS REPORT\n\nIncident classification: Data breach via web application compromise\n\nTimeline:\n- Day 1: Initial compromise through SQL injection vulnerability\n- Days 1-5: Lateral movement and privilege escalation\n- Days 5-12: Data exfiltration of customer records (estimated 500,000 records)\n- Day 13: Detection via anomalous database queries\n- Day 14: Containment and response initiated\n\nRoot cause analysis:\n- Unpatched vulnerability in customer-facing web application\n- Inadequate network segmentation allowing lateral movement\n- Insufficient logging and monitoring capabilities\n\nImpact assessment:\n- PII exposure including names, addresses, and partial payment information\n- Regulatory reporting requirements triggered under GDPR and state data breach laws\n- Potential financial impact estimated at $2.5M including remediation and notification costs",
    "INCIDENT RESPONSE: ACTIVE DIRECTORY COMPROMISE\n\nSituation summary: Threat actor has obtained Domain Admin privileges in the corporate Active Directory environment. Evidence suggests presence for approximately 18 days before detection.\n\nImmediate actions required:\n1. Initiate AD forest recovery procedures per playbook IR-AD-001\n2. Implement emergency credential rotation for all privileged accounts\n3. Deploy enhanced monitoring for Golden Ticket and DCSync attacks\n4. Isolate critical servers and implement temporary access controls\n\nForensic investigation priorities:\n- Determine initial access vector (current hypothesis: phishing campaign)\n- Identify all compromised accounts and access patterns\n- Establish timeline of attacker activity within the environment\n- Document affected systems and data access\n\nRestore operations via clean forest recovery rather than attempting remediation of compromised environment.",
];

/// General security guidance replies, used when no keyword set matches.
pub(super) const GENERAL_RESPONSES: &[&str] = &[
    "Based on your inquiry, I recommend implementing a defense-in-depth security strategy that combines technical controls, administrative policies, and regular security awareness training. For your specific environment, consider focusing on these key areas:\n\n1. Endpoint protection with advanced EDR capabilities\n2. Network segmentation to contain potential breaches\n3. Multi-factor authentication for all remote access\n4. Regular vulnerability scanning and penetration testing\n\nWould you like me to elaborate on any specific aspect of these security controls?",
    "I've analyzed your security question in the context of current threat intelligence. The approach you're considering aligns with security best practices, but there are some additional considerations to keep in mind:\n\n- Recent threat reports indicate an increase in supply chain attacks targeting your industry\n- The MITRE ATT&CK framework has recently updated tactics related to your area of concern\n- Regulatory requirements in your jurisdiction may require additional documentation and controls\n\nI recommend consulting the latest NIST Special Publication 800-53 Rev. 5 guidelines for comprehensive security controls applicable to your situation.",
    "Security analysis complete. Based on the information provided, here are my recommendations for enhancing your security posture:\n\n1. Implement continuous security monitoring with SIEM integration\n2. Develop and regularly test an incident response plan\n3. Conduct regular security assessments focusing on your critical assets\n4. Deploy application whitelisting on critical systems\n\nThese measures address the most common attack vectors observed in your industry sector based on current threat intelligence. Would you like a more detailed breakdown of implementation strategies for any of these recommendations?",
];
