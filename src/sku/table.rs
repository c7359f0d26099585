//! Product code to display name table.
//!
//! Lookups match by substring containment and take the first hit, so a code that
//! contains another code (`ENTERPRISEPACK_GOV` vs `ENTERPRISEPACK`) must come first.

pub const SKU_NAMES: &[(&str, &str)] = &[
    ("AAD_BASIC", "Azure Active Directory Basic"),
    ("AAD_PREMIUM_P2", "Azure Active Directory Premium P2"),
    ("AAD_PREMIUM_FACULTY", "Azure Active Directory Premium P1 for Faculty"),
    ("AAD_PREMIUM", "Azure Active Directory Premium P1"),
    ("RIGHTSMANAGEMENT_ADHOC", "Rights Management Adhoc"),
    ("RIGHTSMANAGEMENT_STANDARD_FACULTY", "Azure Information Protection for Faculty"),
    ("RIGHTSMANAGEMENT_STANDARD_STUDENT", "Information Rights Management for Students"),
    ("RIGHTSMANAGEMENT", "Azure Information Protection Plan 1"),
    ("ADALLOM_STANDALONE", "Microsoft Cloud App Security"),
    ("ATP_ENTERPRISE_FACULTY", "Microsoft Defender for Office 365 (Plan 1) Faculty"),
    ("ATP_ENTERPRISE_GOV", "Microsoft Defender for Office 365 (Plan 1) GCC"),
    ("ATP_ENTERPRISE", "Microsoft Defender for Office 365 (Plan 1)"),
    ("THREAT_INTELLIGENCE_GOV", "Microsoft Defender for Office 365 (Plan 2) GCC"),
    ("THREAT_INTELLIGENCE", "Microsoft Defender for Office 365 (Plan 2)"),
    ("ATA", "Microsoft Defender for Identity"),
    ("WIN_DEF_ATP", "Microsoft Defender for Endpoint"),
    ("DEFENDER_ENDPOINT_P1_EDU", "Microsoft Defender for Endpoint P1 for EDU"),
    ("DEFENDER_ENDPOINT_P1", "Microsoft Defender for Endpoint P1"),
    ("MDATP_XPLAT", "Microsoft Defender for Endpoint P2_XPLAT"),
    ("MDATP_Server", "Microsoft Defender for Endpoint Server"),
    ("MDE_SMB", "Microsoft Defender for Business"),
    ("ADV_COMMS", "Advanced Communications"),
    ("AX7_USER_TRIAL", "Microsoft Dynamics AX7 User Trial"),
    ("BUSINESS_VOICE_DIRECTROUTING_MED", "Microsoft 365 Business Voice (without Calling Plan) (Medium)"),
    ("BUSINESS_VOICE_DIRECTROUTING", "Microsoft 365 Business Voice (without calling plan)"),
    ("BUSINESS_VOICE_MED2_TELCO", "Microsoft 365 Business Voice (US)"),
    ("BUSINESS_VOICE_MED2", "Microsoft 365 Business Voice"),
    ("CCIBOTS_PRIVPREV_VIRAL", "Power Virtual Agents Viral Trial"),
    ("CDS_DB_CAPACITY_GOV", "Common Data Service Database Capacity for Government"),
    ("CDS_DB_CAPACITY", "Common Data Service Database Capacity"),
    ("CDS_LOG_CAPACITY", "Common Data Service Log Capacity"),
    ("CDSAICAPACITY", "AI Builder Capacity add-on"),
    ("CRMPLAN2", "Microsoft Dynamics CRM Online Basic"),
    ("CRMSTANDARD", "Microsoft Dynamics CRM Online"),
    ("CRMSTORAGE", "Microsoft Dynamics CRM Online Storage Add-On"),
    ("CRMTESTINSTANCE", "Microsoft Dynamics CRM Online Additional Test Instance"),
    ("CRMINSTANCE", "Microsoft Dynamics CRM Online Instance"),
    ("D365_CUSTOMER_SERVICE_ENT_ATTACH", "Dynamics 365 for Customer Service Enterprise Attach"),
    ("D365_FIELD_SERVICE_ATTACH", "Dynamics 365 for Field Service Attach"),
    ("D365_MARKETING_USER", "Dynamics 365 for Marketing USL"),
    ("D365_SALES_ENT_ATTACH", "Dynamics 365 Sales Enterprise Attach"),
    ("D365_SALES_PRO_IW_Trial", "Dynamics 365 Sales Professional Trial"),
    ("D365_SALES_PRO_IW", "Dynamics 365 For Sales Professional Trial"),
    ("D365_SALES_PRO_ATTACH", "Dynamics 365 Sales Professional Attach"),
    ("D365_SALES_PRO", "Dynamics 365 For Sales Professional"),
    ("DYN365_AI_SERVICE_INSIGHTS", "Dynamics 365 Customer Service Insights Trial"),
    ("DYN365_ASSETMANAGEMENT", "Dynamics 365 Asset Management Addl Assets"),
    ("DYN365_BUSCENTRAL_ADD_ENV_ADDON", "Dynamics 365 Business Central Additional Environment Addon"),
    ("DYN365_BUSCENTRAL_DB_CAPACITY", "Dynamics 365 Business Central Database Capacity"),
    ("DYN365_BUSCENTRAL_ESSENTIAL", "Dynamics 365 Business Central Essentials"),
    ("DYN365_BUSCENTRAL_PREMIUM", "Dynamics 365 Business Central Premium"),
    ("DYN365_BUSCENTRAL_TEAM_MEMBER", "Dynamics 365 Business Central Team Members"),
    ("DYN365_CUSTOMER_SERVICE_PRO", "Dynamics 365 Customer Service Professional"),
    ("DYN365_CUSTOMER_VOICE_BASE", "Dynamics 365 Customer Voice"),
    ("DYN365_CUSTOMER_VOICE_ADDON", "Dynamics 365 Customer Voice Additional Responses"),
    ("FORMS_PRO", "Dynamics 365 Customer Voice Trial"),
    ("DYN365_ENTERPRISE_CUSTOMER_SERVICE", "Dynamics 365 for Customer Service Enterprise Edition"),
    ("DYN365_ENTERPRISE_FIELD_SERVICE", "Dynamics 365 for Field Service Enterprise Edition"),
    ("DYN365_ENTERPRISE_P1_IW", "Dynamics 365 P1 Trial for Information Workers"),
    ("DYN365_ENTERPRISE_PLAN1", "Dynamics 365 Customer Engagement Plan"),
    ("DYN365_ENTERPRISE_SALES_CUSTOMERSERVICE", "Dynamics 365 for Sales and Customer Service Enterprise Edition"),
    ("DYN365_ENTERPRISE_SALES", "Dynamics 365 for Sales Enterprise Edition"),
    ("DYN365_ENTERPRISE_TEAM_MEMBERS", "Dynamics 365 for Team Members Enterprise Edition"),
    ("DYN365_FINANCE", "Dynamics 365 Finance"),
    ("DYN365_FINANCIALS_BUSINESS_SKU", "Dynamics 365 for Financials Business Edition"),
    ("DYN365_FINANCIALS_ACCOUNTANT_SKU", "Dynamics 365 Business Central External Accountant"),
    ("DYN365_MARKETING_APP", "Dynamics 365 Marketing"),
    ("DYN365_MARKETING_SANDBOX_APPLICATION_ADDON", "Dynamics 365 Marketing Sandbox Application AddOn"),
    ("DYN365_MARKETING_CONTACT_ADDON_T3", "Dynamics 365 Marketing Additional Non-Prod Application"),
    ("DYN365_REGULATORY_SERVICE", "Dynamics 365 Regulatory Service - Enterprise Edition Trial"),
    ("DYN365_SCM", "Dynamics 365 for Supply Chain Management"),
    ("DYN365_TEAM_MEMBERS", "Dynamics 365 Team Members"),
    ("Dynamics_365_Onboarding_SKU", "Dynamics 365 Talent: Onboard"),
    ("Dynamics_365_Hiring_SKU", "Dynamics 365 Talent: Attract"),
    ("DYN365_RETAIL_TRIAL", "Dynamics 365 Commerce Trial"),
    ("Dynamics_365_for_Operations_Devices", "Dynamics 365 Operations - Device"),
    ("Dynamics_365_for_Operations_Sandbox_Tier2_SKU", "Dynamics 365 Operations - Sandbox Tier 2"),
    ("Dynamics_365_for_Operations_Sandbox_Tier4_SKU", "Dynamics 365 Operations - Sandbox Tier 4"),
    ("Dynamics_365_for_Operations", "Dynamics 365 UNF OPS Plan ENT Edition"),
    ("DYN365_BUSINESS_MARKETING", "Dynamics 365 Marketing Business Edition"),
    ("GUIDES_USER", "Dynamics 365 Guides"),
    ("MICROSOFT_REMOTE_ASSIST_HOLOLENS", "Dynamics 365 Remote Assist HoloLens"),
    ("MICROSOFT_REMOTE_ASSIST", "Dynamics 365 Remote Assist"),
    ("PROJECT_MADEIRA_PREVIEW_IW_SKU", "Dynamics 365 Business Central for IWs"),
    ("SKU_Dynamics_365_for_HCM_Trial", "Dynamics 365 for Talent"),
    ("DESKLESSPACK_GOV", "Office 365 F3 GCC"),
    ("DESKLESSPACK", "Office 365 F3"),
    ("DESKLESSWOFFPACK_GOV", "Office 365 (Plan K2) for Government"),
    ("DESKLESSWOFFPACK", "Office 365 (Plan K2)"),
    ("DEVELOPERPACK_E5", "Microsoft 365 E5 Developer (without Windows and Audio Conferencing)"),
    ("DEVELOPERPACK", "Office 365 E3 Developer"),
    ("EMSPREMIUM_GOV", "Enterprise Mobility + Security E5 GCC"),
    ("EMSPREMIUM", "Enterprise Mobility + Security E5"),
    ("EMS_GOV", "Enterprise Mobility + Security E3 GCC"),
    ("EMS_EDU_FACULTY", "Enterprise Mobility + Security A3 for Faculty"),
    ("IDENTITY_THREAT_PROTECTION_FOR_EMS_E5", "Microsoft 365 E5 Security for EMS E5"),
    ("EMS", "Enterprise Mobility + Security E3"),
    ("ENTERPRISEPACKPLUS_FACULTY", "Office 365 A3 for Faculty"),
    ("ENTERPRISEPACKPLUS_STUDENT", "Office 365 A3 for Students"),
    ("ENTERPRISEPACK_USGOV_DOD", "Office 365 E3_USGOV_DOD"),
    ("ENTERPRISEPACK_USGOV_GCCHIGH", "Office 365 E3_USGOV_GCCHIGH"),
    ("ENTERPRISEPACK_GOV", "Office 365 G3 GCC"),
    ("ENTERPRISEPACKWITHOUTPROPLUS", "Office 365 Enterprise E3 without ProPlus Add-on"),
    ("ENTERPRISEPACK_B_PILOT", "Office 365 (Enterprise Preview)"),
    ("ENTERPRISEPACK_FACULTY", "Office 365 A3 for Faculty (legacy)"),
    ("ENTERPRISEPACK_STUDENT", "Office 365 A3 for Students (legacy)"),
    ("ENTERPRISEPACK", "Office 365 E3"),
    ("ENTERPRISEPREMIUM_NOPSTNCONF", "Office 365 E5 Without Audio Conferencing"),
    ("ENTERPRISEPREMIUM_FACULTY", "Office 365 A5 for Faculty"),
    ("ENTERPRISEPREMIUM_STUDENT", "Office 365 A5 for Students"),
    ("ENTERPRISEPREMIUM_GOV", "Office 365 G5 GCC"),
    ("ENTERPRISEPREMIUM", "Office 365 E5"),
    ("ENTERPRISEWITHSCAL_GOV", "Office 365 G4 GCC"),
    ("ENTERPRISEWITHSCAL", "Office 365 E4"),
    ("EOP_ENTERPRISE_FACULTY", "Exchange Online Protection for Faculty"),
    ("EOP_ENTERPRISE", "Exchange Online Protection"),
    ("EQUIVIO_ANALYTICS_GOV", "Office 365 Advanced Compliance for GCC"),
    ("EQUIVIO_ANALYTICS", "Office 365 Advanced Compliance"),
    ("EXCHANGEARCHIVE_ADDON", "Exchange Online Archiving for Exchange Online"),
    ("EXCHANGEARCHIVE", "Exchange Online Archiving for Exchange Server"),
    ("EXCHANGEDESKLESS", "Exchange Online Kiosk"),
    ("EXCHANGEENTERPRISE_FACULTY", "Exchange Online (Plan 2) for Faculty"),
    ("EXCHANGEENTERPRISE_GOV", "Exchange Online (Plan 2) for Government"),
    ("EXCHANGEENTERPRISE", "Exchange Online (Plan 2)"),
    ("EXCHANGEESSENTIALS", "Exchange Online Essentials (ExO P1 Based)"),
    ("EXCHANGE_S_ESSENTIALS", "Exchange Online Essentials"),
    ("EXCHANGESTANDARD_ALUMNI", "Exchange Online (Plan 1) for Alumni with Yammer"),
    ("EXCHANGESTANDARD_GOV", "Exchange Online (Plan 1) for GCC"),
    ("EXCHANGESTANDARD_STUDENT", "Exchange Online (Plan 1) for Students"),
    ("EXCHANGESTANDARD", "Exchange Online (Plan 1)"),
    ("EXCHANGETELCO", "Exchange Online POP"),
    ("FLOW_BUSINESS_PROCESS", "Power Automate per flow plan"),
    ("FLOW_FREE", "Microsoft Power Automate Free"),
    ("POWERFLOW_P2", "Microsoft PowerApps Plan 2"),
    ("FLOW_P2", "Microsoft Power Automate Plan 2"),
    ("FLOW_PER_USER_DEPT", "Power Automate per user plan dept"),
    ("FLOW_PER_USER", "Power Automate per user plan"),
    ("POWERAUTOMATE_ATTENDED_RPA", "Power Automate per user with attended RPA plan"),
    ("POWERAUTOMATE_UNATTENDED_RPA", "Power Automate unattended RPA add-on"),
    ("IDENTITY_THREAT_PROTECTION", "Microsoft 365 E5 Security"),
    ("INFORMATION_PROTECTION_COMPLIANCE", "Microsoft 365 E5 Compliance"),
    ("INTUNE_A_D_GOV", "Microsoft Intune Device for Government"),
    ("INTUNE_A_D", "Microsoft Intune Device"),
    ("INTUNE_A_VL", "Intune (Volume License)"),
    ("INTUNE_A", "Intune"),
    ("INTUNE_SMB", "Microsoft Intune SMB"),
    ("INTUNE_P2", "Intune Plan 2"),
    ("IT_ACADEMY_AD", "Microsoft Imagine Academy"),
    ("LITEPACK_P2", "Office 365 Small Business Premium"),
    ("LITEPACK", "Office 365 Small Business"),
    ("M365EDU_A1", "Microsoft 365 A1"),
    ("M365EDU_A3_FACULTY", "Microsoft 365 A3 for Faculty"),
    ("M365EDU_A3_STUDENT", "Microsoft 365 A3 for Students"),
    ("M365EDU_A3_STUUSEBNFT_RPA1", "Microsoft 365 A3 Unattended License for Students Use Benefit"),
    ("M365EDU_A3_STUUSEBNFT", "Microsoft 365 A3 for Students Use Benefit"),
    ("M365EDU_A5_FACULTY", "Microsoft 365 A5 for Faculty"),
    ("M365EDU_A5_STUDENT", "Microsoft 365 A5 for Students"),
    ("M365EDU_A5_STUUSEBNFT", "Microsoft 365 A5 for Students Use Benefit"),
    ("M365EDU_A5_NOPSTNCONF_STUUSEBNFT", "Microsoft 365 A5 without Audio Conferencing for Students Use Benefit"),
    ("M365_E5_SUITE_COMPONENTS", "Microsoft 365 E5 Suite Features"),
    ("M365_F1_COMM", "Microsoft 365 F1"),
    ("M365_F1_GOV", "Microsoft 365 F3 GCC"),
    ("M365_F1", "Microsoft 365 F1 (legacy)"),
    ("M365_G3_GOV", "Microsoft 365 G3 GCC"),
    ("M365_G5_GCC", "Microsoft 365 GCC G5"),
    ("M365_SECURITY_COMPLIANCE_FOR_FLW", "Microsoft 365 Security and Compliance for Firstline Workers"),
    ("M365_E5_SECURITY", "Microsoft 365 E5 Security Add-on"),
    ("MCOCAP_GOV", "Common Area Phone for GCC"),
    ("MCOCAP", "Common Area Phone"),
    ("MCOEV_DOD", "Microsoft 365 Phone System for DoD"),
    ("MCOEV_FACULTY", "Microsoft 365 Phone System for Faculty"),
    ("MCOEV_GCCHIGH", "Microsoft 365 Phone System for GCCHIGH"),
    ("MCOEV_GOV", "Microsoft 365 Phone System for GCC"),
    ("MCOEV_STUDENT", "Microsoft 365 Phone System for Students"),
    ("MCOEV_TELSTRA", "Microsoft 365 Phone System for Telstra"),
    ("MCOEV_USGOV_DOD", "Microsoft 365 Phone System_USGOV_DOD"),
    ("MCOEV_USGOV_GCCHIGH", "Microsoft 365 Phone System_USGOV_GCCHIGH"),
    ("MCOEVSMB_1", "Microsoft 365 Phone System for Small and Medium Business"),
    ("MCOEV", "Microsoft 365 Phone System"),
    ("MCOIMP", "Skype for Business Online (Plan 1)"),
    ("MCOMEETACPEA", "Microsoft 365 Audio Conferencing Pay-Per-Minute"),
    ("MCOMEETADV_GOV", "Microsoft 365 Audio Conferencing for GCC"),
    ("MCOMEETADV", "Microsoft 365 Audio Conferencing"),
    ("MCOPSTN_5", "Microsoft 365 Domestic Calling Plan (120 Minutes)"),
    ("MCOPSTN1_GOV", "Domestic Calling Plan for GCC"),
    ("MCOPSTN1", "Microsoft 365 Domestic Calling Plan"),
    ("MCOPSTN2", "Domestic and International Calling Plan"),
    ("MCOPSTNC", "Communications Credits"),
    ("MCOPSTNEAU2", "Telstra Calling for O365"),
    ("MCOPSTNPP", "Skype for Business PSTN Usage Calling Plan"),
    ("MCOSTANDARD_GOV", "Skype for Business Online (Plan 2) for Government"),
    ("MCOSTANDARD_MIDMARKET", "Skype for Business Online (Plan 2) for Midsize"),
    ("MCOSTANDARD", "Skype for Business Online (Plan 2)"),
    ("MCOVOICECONF", "Skype for Business Online (Plan 3)"),
    ("MCO_TEAMS_IW", "Microsoft Teams"),
    ("MEETING_ROOM_NOAUDIOCONF", "Microsoft Teams Rooms Standard without Audio Conferencing"),
    ("MEETING_ROOM", "Microsoft Teams Rooms Standard"),
    ("Microsoft_Teams_Rooms_Pro", "Microsoft Teams Rooms Pro"),
    ("Microsoft_Teams_Rooms_Basic", "Microsoft Teams Rooms Basic"),
    ("MICROSOFT_BUSINESS_CENTER", "Microsoft Business Center"),
    ("MIDSIZEPACK", "Office 365 Midsize Business"),
    ("MS_TEAMS_IW", "Microsoft Teams Trial"),
    ("MTR_PREM", "Teams Rooms Premium"),
    ("NONPROFIT_PORTAL", "Nonprofit Portal"),
    ("O365_BUSINESS_ESSENTIALS", "Microsoft 365 Business Basic"),
    ("O365_BUSINESS_PREMIUM", "Microsoft 365 Business Standard"),
    ("O365_BUSINESS", "Microsoft 365 Apps for Business"),
    ("OFFICE365_MULTIGEO", "Multi-Geo Capabilities in Office 365"),
    ("OFFICESUBSCRIPTION_FACULTY", "Office 365 ProPlus for Faculty"),
    ("OFFICESUBSCRIPTION_STUDENT", "Office 365 ProPlus for Students"),
    ("OFFICESUBSCRIPTION_GOV", "Office 365 ProPlus for Government"),
    ("OFFICESUBSCRIPTION", "Microsoft 365 Apps for Enterprise"),
    ("PHONESYSTEM_VIRTUALUSER_GOV", "Microsoft 365 Phone System - Virtual User for GCC"),
    ("PHONESYSTEM_VIRTUALUSER_FACULTY", "Microsoft Teams Phone Resource Account for Faculty"),
    ("PHONESYSTEM_VIRTUALUSER_STUDENT", "Microsoft Teams Phone Resource Account for Students"),
    ("PHONESYSTEM_VIRTUALUSER", "Microsoft 365 Phone System - Virtual User"),
    ("PLANNERSTANDALONE", "Planner Standalone"),
    ("POWER_BI_ADDON", "Power BI for Office 365 Add-On"),
    ("POWER_BI_INDIVIDUAL_USER", "Power BI"),
    ("POWER_BI_PRO_CE", "Power BI Pro CE"),
    ("POWER_BI_PRO_DEPT", "Power BI Pro Dept"),
    ("POWER_BI_PRO_FACULTY", "Power BI Pro for Faculty"),
    ("POWER_BI_PRO", "Power BI Pro"),
    ("POWER_BI_STANDARD_FACULTY", "Power BI (free) for Faculty"),
    ("POWER_BI_STANDARD", "Power BI (free)"),
    ("PBI_PREMIUM_PER_USER_ADDON", "Power BI Premium Per User Add-On"),
    ("PBI_PREMIUM_PER_USER_DEPT", "Power BI Premium Per User Dept"),
    ("PBI_PREMIUM_PER_USER", "Power BI Premium Per User"),
    ("PBI_PREMIUM_P1_ADDON", "Power BI Premium P1"),
    ("POWERAPPS_DEV", "Microsoft Power Apps for Developer"),
    ("POWERAPPS_INDIVIDUAL_USER", "Power Apps and Logic Flows"),
    ("POWERAPPS_PER_APP_IW", "Power Apps per app baseline access"),
    ("POWERAPPS_PER_APP_NEW", "Power Apps per app plan (1 app or portal)"),
    ("POWERAPPS_PER_APP", "Power Apps per app plan"),
    ("POWERAPPS_PER_USER", "Power Apps per user plan"),
    ("POWERAPPS_PORTALS_LOGIN_T2", "Power Apps Portals login capacity add-on Tier 2"),
    ("POWERAPPS_PORTALS_PAGEVIEW", "Power Apps Portals page view capacity add-on"),
    ("POWERAPPS_VIRAL", "Microsoft Power Apps Plan 2 Trial"),
    ("POWERFLOW_P1", "Microsoft PowerApps Plan 1"),
    ("POWER_PAGES_VTRIAL_FOR_MAKERS", "Power Pages vTrial for Makers"),
    ("PROJECTCLIENT", "Project for Office 365"),
    ("PROJECTESSENTIALS_GOV", "Project Online Essentials for GCC"),
    ("PROJECTESSENTIALS", "Project Online Essentials"),
    ("PROJECTONLINE_PLAN_1", "Project Online Premium Without Project Client"),
    ("PROJECTONLINE_PLAN_2", "Project Online With Project for Office 365"),
    ("PROJECTPREMIUM_GOV", "Project Online Premium for GCC"),
    ("PROJECTPREMIUM", "Project Online Premium"),
    ("PROJECTPROFESSIONAL_GOV", "Project Online Professional for GCC"),
    ("PROJECTPROFESSIONAL", "Project Online Professional"),
    ("PROJECT_P1", "Project Plan 1"),
    ("PROJECT_PLAN1_DEPT", "Project Plan 1 (for Department)"),
    ("PROJECT_PLAN3_DEPT", "Project Plan 3 (for Department)"),
    ("PROJECT_MADEIRA_PREVIEW_IW", "Dynamics 365 Business Central Preview"),
    ("RMSBASIC", "Rights Management Service Basic Content Protection"),
    ("RMS_S_ENTERPRISE_GOV", "Windows Azure Active Directory Rights Management for Government"),
    ("SHAREPOINTDESKLESS", "SharePoint Online Kiosk"),
    ("SHAREPOINTENTERPRISE_GOV", "SharePoint Online (Plan 2) for Government"),
    ("SHAREPOINTENTERPRISE_MIDMARKET", "SharePoint Online (Plan 1) for Midsize"),
    ("SHAREPOINTENTERPRISE", "SharePoint Online (Plan 2)"),
    ("SHAREPOINTSTANDARD_EDU", "SharePoint Online (Plan 1) for Education"),
    ("SHAREPOINTSTANDARD", "SharePoint Online (Plan 1)"),
    ("SHAREPOINTSTORAGE_GOV", "Office 365 Extra File Storage for GCC"),
    ("SHAREPOINTSTORAGE", "Office 365 Extra File Storage"),
    ("SHAREPOINTWAC", "Office Online"),
    ("SMB_APPS", "Business Apps (free)"),
    ("SMB_BUSINESS_ESSENTIALS", "Office 365 Business Essentials (SMB)"),
    ("SMB_BUSINESS_PREMIUM", "Office 365 Business Premium (SMB)"),
    ("SMB_BUSINESS", "Office 365 Business (SMB)"),
    ("SOCIAL_ENGAGEMENT_APP_USER", "Dynamics 365 AI for Market Insights"),
    ("SPB_GOV", "Microsoft 365 Business Premium for GCC"),
    ("SPB", "Microsoft 365 Business Premium"),
    ("SPE_E3_RPA1", "Microsoft 365 E3 - Unattended License"),
    ("SPE_E3_USGOV_DOD", "Microsoft 365 E3_USGOV_DOD"),
    ("SPE_E3_USGOV_GCCHIGH_RPA1", "Microsoft 365 E3_USGOV_GCCHIGH - Unattended"),
    ("SPE_E3_USGOV_GCCHIGH", "Microsoft 365 E3_USGOV_GCCHIGH"),
    ("SPE_E3", "Microsoft 365 E3"),
    ("SPE_E5_NOPSTNCONF", "Microsoft 365 E5 (without Audio Conferencing)"),
    ("SPE_E5_CALLINGMINUTES", "Microsoft 365 E5 with Calling Minutes"),
    ("SPE_E5", "Microsoft 365 E5"),
    ("SPE_F1", "Microsoft 365 F3"),
    ("SPE_F5_COMP", "Microsoft 365 F5 Compliance Add-on"),
    ("SPE_F5_SECCOMP", "Microsoft 365 F5 Security + Compliance Add-on"),
    ("SPE_F5_SEC", "Microsoft 365 F5 Security Add-on"),
    ("SPZA_IW", "App Connect IW"),
    ("STANDARDPACK_GOV", "Office 365 G1 GCC"),
    ("STANDARDPACK_STUDENT", "Office 365 (Plan A1) for Students"),
    ("STANDARDPACK_FACULTY", "Office 365 (Plan A1) for Faculty"),
    ("STANDARDPACK", "Office 365 E1"),
    ("STANDARDWOFFPACK_FACULTY", "Office 365 A1 for Faculty"),
    ("STANDARDWOFFPACK_IW_FACULTY", "Office 365 A1 Plus for Faculty"),
    ("STANDARDWOFFPACK_IW_STUDENT", "Office 365 A1 Plus for Students"),
    ("STANDARDWOFFPACK_STUDENT", "Office 365 A1 for Students"),
    ("STANDARDWOFFPACK", "Office 365 E2"),
    ("STREAM_P2", "Microsoft Stream Plan 2"),
    ("STREAM_STORAGE", "Microsoft Stream Storage Add-On (500 GB)"),
    ("STREAM", "Microsoft Stream"),
    ("TEAMS_COMMERCIAL_TRIAL", "Microsoft Teams Commercial Cloud"),
    ("TEAMS_EXPLORATORY", "Microsoft Teams Exploratory"),
    ("TEAMS_ESSENTIALS_AAD", "Microsoft Teams Essentials (AAD identity)"),
    ("TEAMS_FREE", "Microsoft Teams (Free)"),
    ("Teams_Premium_(for_Departments)", "Teams Premium (for Departments)"),
    ("TEAMS_PREMIUM", "Microsoft Teams Premium"),
    ("Microsoft_Teams_Premium", "Microsoft Teams Premium Introductory Pricing"),
    ("TEAMS1", "Microsoft Teams"),
    ("TOPIC_EXPERIENCES", "Viva Topics"),
    ("UNIVERSAL_PRINT", "Universal Print"),
    ("VIRTUAL_AGENT_BASE", "Power Virtual Agent"),
    ("VIRTUAL_AGENT_USL", "Power Virtual Agent User License"),
    ("VISIO_PLAN1_DEPT", "Visio Plan 1"),
    ("VISIO_PLAN2_DEPT", "Visio Plan 2"),
    ("VISIOCLIENT_GOV", "Visio Plan 2 for GCC"),
    ("VISIOCLIENT", "Visio Online Plan 2"),
    ("VISIOONLINE_PLAN1", "Visio Online Plan 1"),
    ("VIVA_GOALS", "Microsoft Viva Goals"),
    ("VIVA_LEARNING_PREMIUM", "Viva Learning"),
    ("VIVA", "Microsoft Viva Suite"),
    ("WACONEDRIVEENTERPRISE", "OneDrive for Business (Plan 2)"),
    ("WACONEDRIVESTANDARD_GOV", "OneDrive for Business (Plan 1) for GCC"),
    ("WACONEDRIVESTANDARD", "OneDrive for Business (Plan 1)"),
    ("WIN10_ENT_A3_FAC", "Windows 10 Enterprise A3 for Faculty"),
    ("WIN10_ENT_A3_STU", "Windows 10 Enterprise A3 for Students"),
    ("WIN10_PRO_ENT_SUB", "Windows 10 Enterprise E3"),
    ("WIN10_VDA_E3", "Windows 10 Enterprise E3"),
    ("WIN10_VDA_E5", "Windows 10 Enterprise E5"),
    ("WIN_ENT_E5", "Windows 10/11 Enterprise E5 (Original)"),
    ("WINDOWS_STORE", "Windows Store for Business"),
    ("WINE5_GCC_COMPAT", "Windows 10 Enterprise E5 Commercial (GCC Compatible)"),
    ("Windows_365_S_2vCPU_4GB_128GB", "Windows 365 Shared Use 2 vCPU 4 GB 128 GB"),
    ("CPC_E_2C_4GB_64GB", "Windows 365 Enterprise 2 vCPU 4 GB 64 GB"),
    ("CPC_E_2C_8GB_128GB", "Windows 365 Enterprise 2 vCPU 8 GB 128 GB"),
    ("CPC_B_2C_4GB_64GB", "Windows 365 Business 2 vCPU 4 GB 64 GB"),
    ("WORKPLACE_ANALYTICS", "Microsoft Workplace Analytics"),
    ("YAMMER_ENTERPRISE_STANDALONE", "Yammer Enterprise"),
    ("YAMMER_ENTERPRISE", "Yammer Enterprise"),
    ("YAMMER_MIDSIZE", "Yammer Midsize"),
    ("AAD_SMB", "Azure Active Directory"),
    ("EXCHANGE_ANALYTICS", "Microsoft MyAnalytics (Full)"),
    ("Microsoft_Cloud_App_Security_App_Governance_Add_On", "App governance add-on to Microsoft Defender for Cloud Apps"),
    ("Microsoft_Intune_Suite", "Microsoft Intune Suite"),
    ("MICROSOFT_SEARCH", "Microsoft Search"),
    ("Microsoft_365_Copilot", "Microsoft 365 Copilot"),
    ("Microsoft_Copilot_for_Sales", "Microsoft Copilot for Sales"),
    ("MFA_STANDALONE", "Microsoft Azure Multi-Factor Authentication"),
    ("MICROSOFT_DEFENDER_VULNERABILITY_MANAGEMENT", "Microsoft Defender Vulnerability Management Add-on"),
    ("ONEDRIVE_BASIC", "OneDrive Basic"),
    ("OFFICE_PROPLUS_DEVICE1", "Microsoft 365 Apps for Enterprise (device)"),
    ("MEE_FACULTY", "Minecraft Education Faculty"),
    ("MEE_STUDENT", "Minecraft Education Student"),
    ("PRIVACY_MANAGEMENT_RISK", "Privacy Management - risk"),
    ("PRIVACY_MANAGEMENT_SUB_RIGHTS_REQUEST_1", "Privacy Management - subject rights request (1)"),
    ("PROJECT_P3", "Project Plan 3"),
    ("PROJECT_P5", "Project Plan 5"),
    ("RMS_S_ADHOC", "Rights Management Adhoc (service)"),
    ("TEAMS_AR_DOD", "Microsoft Teams Audio Conferencing with Dial-out to USA/CAN (DoD)"),
    ("TEAMS_AR_GCCHIGH", "Microsoft Teams Audio Conferencing with Dial-out to USA/CAN (GCCHigh)"),
    ("Microsoft_Teams_Audio_Conferencing_select_dial_out", "Microsoft Teams Audio Conferencing with dial-out to USA/CAN"),
    ("MCOTEAMS_ESSENTIALS", "Teams Phone with Calling Plan"),
    ("Win10_VDA_E3", "Windows 10/11 Enterprise E3 (VDA)"),
    ("WINDOWS_ENT_E3", "Windows 10/11 Enterprise E3"),
    ("Virtualization_Rights_for_Windows_10_E3_E5", "Windows 10/11 Enterprise E3 (local only)"),
    ("O365_w/o_Teams_Bundle_M3", "Microsoft 365 E3 EEA (no Teams)"),
    ("O365_w/o_Teams_Bundle_M5", "Microsoft 365 E5 EEA (no Teams)"),
    ("Office_365_w/o_Teams_Bundle_E3", "Office 365 E3 EEA (no Teams)"),
    ("Office_365_w/o_Teams_Bundle_E5", "Office 365 E5 EEA (no Teams)"),
    ("Microsoft_Teams_EEA_New", "Microsoft Teams EEA"),
];
